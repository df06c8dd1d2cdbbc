//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// `url = ...` line for the [status] section, commented out when unset
    fn status_url_to_toml(&self) -> String {
        match &self.status.url {
            Some(url) => format!("url = {:?}", url),
            None => "# url = \"https://status.example.com/api/status\"  # or MINEFLARED_STATUS_URL"
                .to_string(),
        }
    }

    /// `request_timeout_secs = ...` line, commented out when unset
    fn status_timeout_to_toml(&self) -> String {
        match self.status.request_timeout_secs {
            Some(secs) => format!("request_timeout_secs = {}", secs),
            None => "# request_timeout_secs = 30  # unset: no timeout".to_string(),
        }
    }

    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# mineflared-status configuration

# Page location; its `username` query parameter selects the server to check
location = {location:?}

# Display language: en, pt-BR
language = "{language}"

# Theme: light, dark (press 't' in the TUI to toggle)
theme = "{theme}"

# Status endpoint
[status]
{status_url}
origin = {origin:?}
{timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
"#,
            location = self.location,
            language = self.locale.as_str(),
            theme = self.theme.as_str(),
            status_url = self.status_url_to_toml(),
            origin = self.status.origin,
            timeout = self.status_timeout_to_toml(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
