use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Mapping from URL path to the file that serves it.
///
/// Built once per server from a recursive walk of the proxy directory and
/// read-only afterwards; changing the directory contents requires a restart.
///
/// Aliasing rules:
/// - a file named `index.html` anywhere in the tree is registered under `/`
///   and `/index.html` (last writer wins if there are several)
/// - other `.html` files also get an extension-stripped alias
/// - every file gets its literal alias, separators normalized to `/`
///
/// Files without an extension (e.g. `LICENSE`) are not servable.
#[derive(Debug, Clone)]
pub struct UrlIndex {
    routes: HashMap<String, PathBuf>,
}

impl UrlIndex {
    pub fn build(root: &Path) -> anyhow::Result<Self> {
        let root = root.canonicalize()?;
        let mut routes = HashMap::new();

        for entry in WalkDir::new(&root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.contains('.') {
                continue;
            }

            let path = entry.path().to_path_buf();
            let relative = path.strip_prefix(&root)?;
            let url = format!(
                "/{}",
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            );

            if name == "index.html" {
                routes.insert("/".to_string(), path.clone());
                routes.insert("/index.html".to_string(), path);
                continue;
            }

            if let Some(stripped) = url.strip_suffix(".html") {
                routes.insert(stripped.to_string(), path.clone());
            }

            routes.insert(url, path);
        }

        Ok(Self { routes })
    }

    /// Resolves a URL path to the file backing it, if any.
    pub fn resolve(&self, slug: &str) -> Option<&Path> {
        self.routes.get(slug).map(|p| p.as_path())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
