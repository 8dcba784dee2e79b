use std::fmt;
use std::path::{Path, PathBuf};

/// Extensions whose files are read and served as UTF-8 text.
/// Everything else is treated as binary.
const TEXT_EXTENSIONS: [&str; 5] = ["txt", "html", "css", "js", "md"];

/// Maps a known file extension to its media type string.
fn media_type_for(extension: &str) -> Option<&'static str> {
    match extension {
        "txt" => Some("text/plain"),
        "html" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "mp4" => Some("video/mp4"),
        "mp3" => Some("audio/mpeg"),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeError {
    /// Media type string is not of the shape "category/subtype"
    BadShape(String),
    /// The resource path does not reference an existing filesystem entry
    MissingResource(PathBuf),
}

impl fmt::Display for MimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MimeError::BadShape(t) => write!(f, "incorrect MIME type provided {t}"),
            MimeError::MissingResource(p) => {
                write!(f, "resource {} does not exist", p.display())
            }
        }
    }
}

impl std::error::Error for MimeError {}

/// A media type paired with the file it was derived from.
///
/// The `resource_path`, when present, is the file the response body should be
/// loaded from; `is_binary` decides whether that read (and the response
/// serialization) goes through the text or the raw-bytes path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    pub media_type: String,
    pub resource_path: Option<PathBuf>,
    pub is_binary: bool,
}

impl MimeType {
    /// Constructs a MimeType, validating the "category/subtype" shape and
    /// that the resource path (if any) exists.
    pub fn new(
        media_type: &str,
        resource_path: Option<PathBuf>,
        is_binary: bool,
    ) -> Result<Self, MimeError> {
        let mut parts = media_type.split('/');
        let category = parts.next().unwrap_or("");
        let subtype = parts.next().unwrap_or("");
        if category.is_empty() || subtype.is_empty() || parts.next().is_some() {
            return Err(MimeError::BadShape(media_type.to_string()));
        }

        if let Some(path) = &resource_path {
            if !path.exists() {
                return Err(MimeError::MissingResource(path.clone()));
            }
        }

        Ok(Self {
            media_type: media_type.to_string(),
            resource_path,
            is_binary,
        })
    }

    /// The fixed fallback type used for responses without a file body.
    pub fn octet_stream() -> Self {
        Self {
            media_type: "application/octet-stream".to_string(),
            resource_path: None,
            is_binary: false,
        }
    }

    /// Derives a MimeType from a file path's extension.
    ///
    /// Extensions ending in `gz` (tarballs, but also e.g. `svgz`) keep their
    /// last two dot-separated segments. Unknown extensions fall back to
    /// `application/octet-stream` and are treated as binary.
    pub fn from_path(path: &Path) -> Result<Self, MimeError> {
        let lower = path.to_string_lossy().to_lowercase();
        let mut extension = lower.rsplit('.').next().unwrap_or("").to_string();
        if extension.ends_with("gz") {
            let segments: Vec<&str> = lower.rsplit('.').take(2).collect();
            if segments.len() == 2 {
                extension = format!("{}.{}", segments[1], segments[0]);
            }
        }

        let is_binary = !TEXT_EXTENSIONS.contains(&extension.as_str());
        let media_type = media_type_for(&extension).unwrap_or("application/octet-stream");

        Self::new(media_type, Some(path.to_path_buf()), is_binary)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octet_stream_fallback_shape() {
        let mime = MimeType::octet_stream();
        assert_eq!(mime.media_type, "application/octet-stream");
        assert!(mime.resource_path.is_none());
    }

    #[test]
    fn rejects_malformed_type_strings() {
        assert!(MimeType::new("text/html/css", None, false).is_err());
        assert!(MimeType::new("text html", None, false).is_err());
        assert!(MimeType::new("text/", None, false).is_err());
    }
}
