//! Status endpoint configuration

use serde::Deserialize;

/// Origin the status endpoint allow-lists
pub const DEFAULT_ORIGIN: &str = "https://mineflared.theushen.me";

/// Status endpoint settings
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// Base URL of the status endpoint; required outside demo mode
    pub url: Option<String>,
    /// Value of the `origin` header sent with every lookup
    pub origin: String,
    /// Per-request timeout; `None` waits as long as the transport does
    pub request_timeout_secs: Option<u64>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            url: None,
            origin: DEFAULT_ORIGIN.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Status settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileStatus {
    pub url: Option<String>,
    pub origin: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl StatusConfig {
    /// Create from file config with defaults; `env_url` wins over the file
    pub fn from_file(file: Option<FileStatus>, env_url: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            url: env_url
                .or(file.url)
                .filter(|url| !url.trim().is_empty()),
            origin: file.origin.unwrap_or(defaults.origin),
            // 0 means "no timeout", same as leaving it out
            request_timeout_secs: file.request_timeout_secs.filter(|secs| *secs > 0),
        }
    }
}
