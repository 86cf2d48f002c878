use std::path::PathBuf;

/// Storage desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 8080 | Ticket request page port |
/// | WEB_ROOT | ./wwwroot | Static files for the request page |
/// | LOG_LEVEL | info | Log level when RUST_LOG is unset |
/// | LOG_DIR | (none) | Daily rolling log files, if the directory exists |
///
/// The printer itself is fixed: the desk has one Epson on USB.
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub web_root: PathBuf,
    pub log_level: Option<String>,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            web_root: std::env::var("WEB_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("wwwroot")),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
