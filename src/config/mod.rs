//! Configuration for the status client
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (applied by `cli`)
//! 2. Environment variables
//! 3. Config file (~/.config/mineflared-status/config.toml)
//! 4. Built-in defaults (lowest priority)

use crate::i18n::Locale;
use crate::tui::theme::ThemeKind;
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;
mod status;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use status::{FileStatus, StatusConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public address of the status page
pub const DEFAULT_LOCATION: &str = "https://mineflared.theushen.me/status";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Page location whose `username` parameter selects what to check
    pub location: String,

    /// Display language
    pub locale: Locale,

    /// Color theme
    pub theme: ThemeKind,

    /// Whether to run the TUI (false = print once and exit)
    pub enable_tui: bool,

    /// Demo mode: answer lookups locally instead of calling the endpoint
    pub demo_mode: bool,

    /// Status endpoint settings
    pub status: StatusConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            locale: Locale::default(),
            theme: ThemeKind::default(),
            enable_tui: true,
            demo_mode: false,
            status: StatusConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub location: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,

    /// Optional [status] section
    pub status: Option<FileStatus>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Truthy env flag ("1" or "true", any case)
fn flag_set(value: Option<String>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl Config {
    /// Get the config file path: ~/.config/mineflared-status/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("mineflared-status")
                .join("config.toml")
        })
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be parsed.
    /// A broken config should fail loudly, not silently fall back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `mineflared-status config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge file config with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Location: env > file > default
        let location = env("MINEFLARED_STATUS_LOCATION")
            .or(file.location)
            .unwrap_or(defaults.location);

        // Language: env > file > default; unknown tags fall back to English
        let locale = env("MINEFLARED_STATUS_LANG")
            .or(file.language)
            .and_then(|tag| Locale::parse(&tag))
            .unwrap_or(defaults.locale);

        // Theme: env > file > default ("light", like the public site)
        let theme = env("MINEFLARED_STATUS_THEME")
            .or(file.theme)
            .and_then(|name| ThemeKind::parse(&name))
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = !flag_set(env("MINEFLARED_STATUS_NO_TUI"));

        // Demo mode: env only (runtime flag)
        let demo_mode = flag_set(env("MINEFLARED_STATUS_DEMO"));

        // Endpoint URL: env takes precedence over [status] url
        let status = StatusConfig::from_file(file.status, env("MINEFLARED_STATUS_URL"));
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            location,
            locale,
            theme,
            enable_tui,
            demo_mode,
            status,
            logging,
        }
    }
}
