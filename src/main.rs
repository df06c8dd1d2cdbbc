// Mineflared Status - is a user's Mineflared server online right now?
//
// Reads a username from the page location (or the command line), asks the
// status endpoint about it, and shows the answer.
//
// Architecture:
// - Status (reqwest): location parsing, endpoint client, widget state machine
// - TUI (ratatui): search form, status panel, logs, key hints
// - Headless: one lookup printed on stdout, outcome as exit code
// - Config: CLI > env > ~/.config/mineflared-status/config.toml > defaults

mod cli;
mod config;
mod demo;
mod headless;
mod i18n;
mod logging;
mod status;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use logging::LogBuffer;
use status::{Location, StatusWidget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (config --show, --reset, --edit, --path)
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config)?;

    // Keep the guard alive so buffered file logs flush on exit
    let log_buffer = LogBuffer::new();
    let file_guard = logging::init(&config, &log_buffer);

    let mut location = Location::parse(&config.location)
        .with_context(|| format!("Invalid location '{}'", config.location))?;
    // Typed input: trimmed like a form submission
    if let Some(username) = cli
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
    {
        location.set_identifier(username);
    }
    tracing::debug!("Location: {}", location);

    let source = status::create_source(&config)?;
    let mut widget = StatusWidget::new(location);

    if config.enable_tui {
        tracing::info!("Starting TUI (status source: {})", source.name());
        if let Err(e) = tui::run_tui(widget, source, log_buffer, config).await {
            tracing::error!("TUI error: {:?}", e);
            return Err(e);
        }
        return Ok(());
    }

    tracing::info!("TUI disabled, running in headless mode");
    let strings = config.locale.strings();
    let mut stdout = std::io::stdout();

    let code = tokio::select! {
        result = headless::run(&mut widget, source.as_ref(), strings, &mut stdout) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted");
            headless::EXIT_FAILED
        }
    };

    // process::exit skips destructors; flush file logs first
    drop(file_guard);
    std::process::exit(code);
}
