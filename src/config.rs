use serde::Deserialize;

/// Server configuration.
///
/// Loaded from a YAML file named by the `HHTTPP_CONFIG` environment variable,
/// or defaults when the variable is unset. Missing fields fall back to their
/// defaults either way. `HHTTPP_LISTEN` (a `host:port` pair) overrides the
/// listen address from either source.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory tree the server serves files out of
    pub proxy_directory: String,
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Treat 4xx responses as fatal for the request that produced them
    pub error_on_4xx: bool,
    /// Treat 5xx responses as fatal for the request that produced them
    pub error_on_5xx: bool,
    /// Maximum number of request/response log entries retained
    pub log_limit: usize,
    /// How long a single accept wait lasts before re-checking for shutdown
    pub accept_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_directory: ".".to_string(),
            host: "127.0.0.1".to_string(),
            port: 9338,
            error_on_4xx: false,
            error_on_5xx: true,
            log_limit: 500,
            accept_timeout_secs: 1,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("HHTTPP_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)?;
                serde_yaml::from_str(&text)?
            }
            Err(_) => Self::default(),
        };

        // HHTTPP_LISTEN=host:port wins over both the file and the defaults
        if let Ok(listen) = std::env::var("HHTTPP_LISTEN") {
            cfg.set_listen_addr(&listen)?;
        }

        Ok(cfg)
    }

    /// Applies a `host:port` listen address over the configured host and port.
    pub fn set_listen_addr(&mut self, addr: &str) -> anyhow::Result<()> {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("listen address {addr} is not host:port"))?;
        self.host = host.to_string();
        self.port = port.parse()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
