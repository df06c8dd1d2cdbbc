// Demo mode: answer status lookups locally to showcase the TUI
//
// The answer is derived from the username so the same name always gets the
// same result:
// - names starting with "off" -> offline
// - names starting with "err" -> server error
// - names starting with "slow" -> online, after a long delay
// - anything else             -> online
//
// Run with: MINEFLARED_STATUS_DEMO=1 cargo run --release

use crate::status::{ServerState, StatusError, StatusResponse, StatusSource};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;
use tokio::time::sleep;

/// Status source that never touches the network
pub struct DemoStatusSource {
    delay: Duration,
}

impl Default for DemoStatusSource {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

impl DemoStatusSource {
    #[cfg(test)]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn answer(identifier: &str) -> Result<StatusResponse, StatusError> {
        let lower = identifier.to_lowercase();
        if lower.starts_with("err") {
            return Err(StatusError::Server {
                status: 500,
                message: Some(format!("Tunnel registry unavailable for {}", identifier)),
            });
        }

        let (status, message) = if lower.starts_with("off") {
            (
                ServerState::Offline,
                format!("No active tunnel for {}", identifier),
            )
        } else {
            (
                ServerState::Online,
                format!("{}'s server is reachable through the tunnel", identifier),
            )
        };

        Ok(StatusResponse {
            status,
            message,
            error: None,
        })
    }
}

impl StatusSource for DemoStatusSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn fetch(&self, identifier: String) -> BoxFuture<'_, Result<StatusResponse, StatusError>> {
        let delay = if identifier.to_lowercase().starts_with("slow") {
            self.delay * 5
        } else {
            self.delay
        };

        async move {
            sleep(delay).await;
            Self::answer(&identifier)
        }
        .boxed()
    }
}
