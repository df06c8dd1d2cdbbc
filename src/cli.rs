// CLI module - command-line argument parsing and handlers
//
// The bare command runs the status lookup; flags override config for one run.
// Subcommands manage the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Print config file path

use crate::config::{Config, VERSION};
use crate::i18n::Locale;
use crate::tui::theme::ThemeKind;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Mineflared server status - check whether a user's server is online
#[derive(Parser, Debug)]
#[command(name = "mineflared-status")]
#[command(version = VERSION)]
#[command(about = "Check whether a Mineflared server is online", long_about = None)]
pub struct Cli {
    /// Username to look up (overrides the location's `username` parameter)
    pub username: Option<String>,

    /// Page location whose `username` query parameter selects the server
    #[arg(long, value_name = "LOCATION")]
    pub url: Option<String>,

    /// Base URL of the status endpoint
    #[arg(long, value_name = "BASE")]
    pub status_url: Option<String>,

    /// Display language (en, pt-BR)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Color theme (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Print the result once and exit instead of starting the TUI
    #[arg(long)]
    pub no_tui: bool,

    /// Answer lookups locally without calling the status endpoint
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of env/file config
    ///
    /// Unknown language or theme names are rejected here rather than
    /// silently falling back, since the user typed them just now.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(url) = &self.url {
            config.location = url.clone();
        }
        if let Some(status_url) = &self.status_url {
            if !status_url.trim().is_empty() {
                config.status.url = Some(status_url.trim().to_string());
            }
        }
        if let Some(lang) = &self.lang {
            let Some(locale) = Locale::parse(lang) else {
                bail!("Unknown language '{}' (expected en or pt-BR)", lang);
            };
            config.locale = locale;
        }
        if let Some(theme) = &self.theme {
            let Some(kind) = ThemeKind::parse(theme) else {
                bail!("Unknown theme '{}' (expected light or dark)", theme);
            };
            config.theme = kind;
        }
        if self.no_tui {
            config.enable_tui = false;
        }
        if self.demo {
            config.demo_mode = true;
        }
        Ok(())
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                // No flag provided, show help
                println!("Usage: mineflared-status config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the lookup
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!("# demo_mode = {} (MINEFLARED_STATUS_DEMO)", config.demo_mode);
    println!("# enable_tui = {} (MINEFLARED_STATUS_NO_TUI)", config.enable_tui);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}
