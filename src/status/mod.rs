//! Server status lookup
//!
//! The status page asks a remote endpoint whether the server owned by a
//! username is online. This module holds the wire types, the error taxonomy,
//! the `StatusSource` seam (HTTP client or demo generator), and the widget
//! state machine that drives a lookup from the page location.

pub mod client;
pub mod location;
pub mod widget;

#[cfg(test)]
pub mod scripted;

use crate::config::Config;
use crate::i18n::Strings;
use anyhow::Result;
use futures::future::BoxFuture;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

pub use client::HttpStatusClient;
pub use location::Location;
pub use widget::{StatusQuery, StatusReport, StatusWidget, ViewState};

/// Online/offline flag reported by the status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    Online,
    Offline,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

/// Success body: `{ "status": "online" | "offline", "message": string, "error"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    pub status: ServerState,
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Why a lookup ended in the failed state
///
/// All variants render the same way (error icon, message, retry); only the
/// message differs. Keeping them apart lets tests and logs tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    /// No `username` in the location; no request was made
    MissingIdentifier,
    /// The request never produced a response (connect, DNS, timeout)
    Transport(String),
    /// A response arrived with a non-success status
    Server { status: u16, message: Option<String> },
    /// Success status but the body did not have the expected shape
    MalformedResponse(String),
}

impl StatusError {
    /// Text shown to the user for this failure
    ///
    /// Server-provided messages are shown verbatim; everything else falls
    /// back to the localized generic string.
    pub fn user_message(&self, strings: &Strings) -> String {
        match self {
            Self::MissingIdentifier => strings.username_required.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Server { message: None, .. }
            | Self::Transport(_)
            | Self::MalformedResponse(_) => strings.generic_error.to_string(),
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIdentifier => write!(f, "No username to look up"),
            Self::Transport(msg) => write!(f, "Transport error: {}", msg),
            Self::Server {
                status,
                message: Some(message),
            } => write!(f, "Server error ({}): {}", status, message),
            Self::Server {
                status,
                message: None,
            } => write!(f, "Server error ({})", status),
            Self::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for StatusError {}

/// Something that can answer "is this user's server online?"
///
/// Object-safe so the app can hold either the HTTP client or the demo
/// generator behind an `Arc<dyn StatusSource>`.
pub trait StatusSource: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Perform one lookup for `identifier`
    fn fetch(&self, identifier: String) -> BoxFuture<'_, Result<StatusResponse, StatusError>>;
}

/// Build the status source selected by config
///
/// Demo mode never touches the network. Otherwise the status URL must be
/// configured; there is no sensible default endpoint.
pub fn create_source(config: &Config) -> Result<Arc<dyn StatusSource>> {
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - status answers are generated locally");
        return Ok(Arc::new(crate::demo::DemoStatusSource::default()));
    }

    let Some(status_url) = config.status.url.as_deref() else {
        anyhow::bail!(
            "Status endpoint is not configured. Set MINEFLARED_STATUS_URL, pass --status-url, \
             or add `url` under [status] in {}",
            Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "the config file".to_string())
        );
    };

    let client = HttpStatusClient::new(status_url, &config.status)?;
    Ok(Arc::new(client))
}

/// Run one attempt against `source` and return the outcome tagged with the
/// attempt's generation, ready for `StatusWidget::complete`.
pub async fn execute(
    source: &dyn StatusSource,
    query: StatusQuery,
) -> (u64, Result<StatusResponse, StatusError>) {
    tracing::debug!(
        "Checking status for '{}' via {} (generation {})",
        query.identifier,
        source.name(),
        query.generation
    );
    let outcome = source.fetch(query.identifier).await;
    (query.generation, outcome)
}
