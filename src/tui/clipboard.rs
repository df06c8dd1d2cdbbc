//! System clipboard access for the `y` (copy) key
//!
//! A fresh `arboard::Clipboard` is opened per copy; the TUI copies rarely
//! and holding one open pins X11/Wayland resources for the whole session.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy a status message to the system clipboard
///
/// Fails on headless systems without a display server.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")?;
    tracing::debug!("Copied {} chars to clipboard", text.chars().count());
    Ok(())
}
