//! HTTP status client
//!
//! `GET <status_url>?username=<identifier>` with a fixed `origin` header.
//! The endpoint allow-lists the public site's origin, so the header is the
//! site's address rather than anything derived from where we run.

use super::{StatusError, StatusResponse, StatusSource};
use crate::config::{StatusConfig, VERSION};
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::location::IDENTIFIER_PARAM;

/// Error body: `{ "message"?: string, "error"?: string }`
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// `message` wins over `error`; blank strings count as absent
    fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}

/// Status source backed by the remote status endpoint
pub struct HttpStatusClient {
    client: reqwest::Client,
    base_url: Url,
    origin: String,
    /// Whole-request timeout; `None` leaves reqwest's default (no timeout)
    timeout: Option<Duration>,
}

impl HttpStatusClient {
    /// Create a client for `status_url`
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the client cannot be built
    pub fn new(status_url: &str, config: &StatusConfig) -> Result<Self> {
        let base_url = Url::parse(status_url)
            .with_context(|| format!("Invalid status endpoint URL '{}'", status_url))?;

        let timeout = config.request_timeout_secs.map(Duration::from_secs);

        let mut builder =
            reqwest::Client::builder().user_agent(format!("mineflared-status/{}", VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        match timeout {
            Some(t) => tracing::info!(
                "Initialized status client: {} (origin: {}, timeout: {}s)",
                base_url,
                config.origin,
                t.as_secs()
            ),
            None => tracing::info!(
                "Initialized status client: {} (origin: {}, no timeout)",
                base_url,
                config.origin
            ),
        }

        Ok(Self {
            client,
            base_url,
            origin: config.origin.clone(),
            timeout,
        })
    }

    /// Endpoint URL for one identifier
    ///
    /// The value is percent-encoded as a URI component, so a space is `%20`
    /// rather than the form-encoded `+`. Any query already on the base URL
    /// is kept in front.
    fn request_url(&self, identifier: &str) -> Url {
        let pair = format!("{}={}", IDENTIFIER_PARAM, urlencoding::encode(identifier));
        let query = match self.base_url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, pair),
            _ => pair,
        };
        let mut url = self.base_url.clone();
        url.set_query(Some(&query));
        url
    }

    async fn lookup(&self, identifier: String) -> Result<StatusResponse, StatusError> {
        let url = self.request_url(&identifier);

        let response = self
            .client
            .get(url)
            .header("origin", &self.origin)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::warn!("Status request timed out after {:?}", self.timeout);
                }
                StatusError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are best-effort; an unreadable one just means no message
            let message = match response.bytes().await {
                Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                    .ok()
                    .and_then(ErrorBody::into_message),
                Err(_) => None,
            };
            tracing::warn!(
                "Status endpoint returned {} for '{}': {}",
                status.as_u16(),
                identifier,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(StatusError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StatusError::Transport(e.to_string()))?;

        let body: StatusResponse = serde_json::from_slice(&bytes)
            .map_err(|e| StatusError::MalformedResponse(e.to_string()))?;

        if let Some(err) = body.error.as_deref() {
            tracing::debug!("Status endpoint attached error detail: {}", err);
        }

        Ok(body)
    }
}

impl StatusSource for HttpStatusClient {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, identifier: String) -> BoxFuture<'_, Result<StatusResponse, StatusError>> {
        self.lookup(identifier).boxed()
    }
}
