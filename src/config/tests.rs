//! Configuration tests
//!
//! Guards that every config field survives serialization and that the
//! env > file > default precedence holds.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    // The unset status URL stays unset (commented out in the template)
    let restored = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(restored.status.url, None);
    assert_eq!(restored.status.request_timeout_secs, None);
    assert_eq!(restored.location, DEFAULT_LOCATION);
}

/// Every persisted field must come back with the value it was written with.
#[test]
fn test_config_roundtrip_all_fields() {
    let mut config = Config::default();
    config.location = "https://example.com/status?username=steve&ref=\"docs\"".to_string();
    config.locale = Locale::PtBr;
    config.theme = ThemeKind::Dark;
    config.status.url = Some("https://status.example.com/api".to_string());
    config.status.origin = "https://other.example.com".to_string();
    config.status.request_timeout_secs = Some(42);
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_dir = PathBuf::from("/tmp/mfs logs");
    config.logging.file_rotation = LogRotation::Hourly;
    config.logging.file_prefix = "status".to_string();

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str)
        .unwrap_or_else(|e| panic!("TOML should parse:\n{}\n{}", toml_str, e));
    let restored = Config::resolve(file, no_env);

    assert_eq!(restored.location, config.location);
    assert_eq!(restored.locale, Locale::PtBr);
    assert_eq!(restored.theme, ThemeKind::Dark);
    assert_eq!(restored.status.url, config.status.url);
    assert_eq!(restored.status.origin, config.status.origin);
    assert_eq!(restored.status.request_timeout_secs, Some(42));
    assert_eq!(restored.logging.level, "debug");
    assert!(restored.logging.file_enabled);
    assert_eq!(restored.logging.file_dir, PathBuf::from("/tmp/mfs logs"));
    assert_eq!(restored.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(restored.logging.file_prefix, "status");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_without_file_or_env() {
    let config = Config::resolve(FileConfig::default(), no_env);
    assert_eq!(config.location, DEFAULT_LOCATION);
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.theme, ThemeKind::Light);
    assert!(config.enable_tui);
    assert!(!config.demo_mode);
    assert_eq!(config.status.origin, "https://mineflared.theushen.me");
    assert_eq!(config.status.request_timeout_secs, None);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
location = "https://file.example.com/status"
language = "en"

[status]
url = "https://file.example.com/api"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("MINEFLARED_STATUS_URL", "https://env.example.com/api"),
            ("MINEFLARED_STATUS_LOCATION", "https://env.example.com/status"),
            ("MINEFLARED_STATUS_LANG", "pt-BR"),
            ("MINEFLARED_STATUS_NO_TUI", "true"),
            ("MINEFLARED_STATUS_DEMO", "1"),
        ]),
    );

    assert_eq!(config.status.url.as_deref(), Some("https://env.example.com/api"));
    assert_eq!(config.location, "https://env.example.com/status");
    assert_eq!(config.locale, Locale::PtBr);
    assert!(!config.enable_tui);
    assert!(config.demo_mode);
}

#[test]
fn test_file_used_when_env_missing() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "dark"

[status]
url = "https://file.example.com/api"
request_timeout_secs = 3

[logging]
level = "warn"
file_rotation = "never"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);
    assert_eq!(config.status.url.as_deref(), Some("https://file.example.com/api"));
    assert_eq!(config.status.request_timeout_secs, Some(3));
    assert_eq!(config.theme, ThemeKind::Dark);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_blank_status_url_counts_as_unset() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("MINEFLARED_STATUS_URL", "  ")]),
    );
    assert_eq!(config.status.url, None);
}

#[test]
fn test_unknown_values_fall_back_to_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
language = "klingon"
theme = "neon"

[status]
request_timeout_secs = 0
"#,
    )
    .unwrap();

    let config = Config::resolve(file, env_from(&[("MINEFLARED_STATUS_NO_TUI", "no")]));
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.theme, ThemeKind::Light);
    assert_eq!(config.status.request_timeout_secs, None);
    assert!(config.enable_tui);
}
