//! Status lookup widget state machine
//!
//! `Idle → Loading → {Resolved, Failed}`; retry and resubmission go back to
//! `Loading`. Every attempt carries a generation number. Mounting, retrying
//! and resubmitting all advance the generation, and `complete` drops any
//! outcome whose generation is not the current one, so a slow response from
//! an earlier attempt can never overwrite a newer state.

use super::{Location, ServerState, StatusError, StatusResponse};

/// One attempt to be executed against a `StatusSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    pub identifier: String,
    pub generation: u64,
}

/// A successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub server_state: ServerState,
    pub message: String,
}

/// What the page shows. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Not mounted yet
    #[default]
    NotRequested,
    Loading,
    Failed(StatusError),
    Resolved(StatusReport),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

pub struct StatusWidget {
    location: Location,
    identifier: Option<String>,
    state: ViewState,
    generation: u64,
}

impl StatusWidget {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            identifier: None,
            state: ViewState::NotRequested,
            generation: 0,
        }
    }

    /// (Re)read the identifier from the location and start from scratch
    ///
    /// Returns the attempt to execute, or `None` when the location carries no
    /// identifier (the widget is then `Failed(MissingIdentifier)`).
    pub fn mount(&mut self) -> Option<StatusQuery> {
        // Any in-flight attempt belongs to the previous mount
        self.generation += 1;
        self.identifier = self.location.identifier();

        match self.identifier.clone() {
            Some(identifier) => {
                tracing::info!("Status lookup mounted for '{}'", identifier);
                Some(self.start(identifier))
            }
            None => {
                tracing::debug!("No username in {}, not querying", self.location);
                self.state = ViewState::Failed(StatusError::MissingIdentifier);
                None
            }
        }
    }

    /// Re-issue the lookup for the same identifier without touching the location
    ///
    /// With no identifier there is nothing to re-query; the caller should
    /// send the user to the form instead.
    pub fn retry(&mut self) -> Option<StatusQuery> {
        let identifier = self.identifier.clone()?;
        self.generation += 1;
        tracing::info!("Retrying status lookup for '{}'", identifier);
        Some(self.start(identifier))
    }

    /// Rewrite the location with a new identifier and remount
    ///
    /// Blank input is ignored and returns `None` with the state unchanged.
    pub fn submit(&mut self, input: &str) -> Option<StatusQuery> {
        let identifier = input.trim();
        if identifier.is_empty() {
            return None;
        }
        self.location.set_identifier(identifier);
        tracing::debug!("Location rewritten to {}", self.location);
        self.mount()
    }

    /// Record the outcome of an attempt
    ///
    /// Returns `false` (and leaves the state alone) for outcomes from a
    /// superseded attempt.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<StatusResponse, StatusError>,
    ) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            tracing::debug!(
                "Discarding stale status outcome (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(response) => {
                tracing::info!(
                    "Server for '{}' is {}",
                    self.identifier.as_deref().unwrap_or_default(),
                    response.status.as_str()
                );
                ViewState::Resolved(StatusReport {
                    server_state: response.status,
                    message: response.message,
                })
            }
            Err(err) => {
                tracing::warn!("Status lookup failed: {}", err);
                ViewState::Failed(err)
            }
        };
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn start(&mut self, identifier: String) -> StatusQuery {
        // Clear any previous result before the new request goes out
        self.state = ViewState::Loading;
        StatusQuery {
            identifier,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::execute;
    use crate::status::scripted::ScriptedSource;

    fn widget(url: &str) -> StatusWidget {
        StatusWidget::new(Location::parse(url).unwrap())
    }

    fn online(message: &str) -> Result<StatusResponse, StatusError> {
        Ok(StatusResponse {
            status: ServerState::Online,
            message: message.to_string(),
            error: None,
        })
    }

    #[test]
    fn starts_not_requested() {
        let w = widget("https://example.com/status?username=steve");
        assert_eq!(w.state(), &ViewState::NotRequested);
        assert_eq!(w.identifier(), None);
    }

    #[test]
    fn mount_without_identifier_fails_locally() {
        let mut w = widget("https://example.com/status");
        assert_eq!(w.mount(), None);
        assert_eq!(
            w.state(),
            &ViewState::Failed(StatusError::MissingIdentifier)
        );
        // Retry has nothing to re-query
        assert_eq!(w.retry(), None);
        assert_eq!(
            w.state(),
            &ViewState::Failed(StatusError::MissingIdentifier)
        );
    }

    #[test]
    fn mount_with_identifier_goes_loading() {
        let mut w = widget("https://example.com/status?username=steve");
        let query = w.mount().unwrap();
        assert_eq!(query.identifier, "steve");
        assert_eq!(query.generation, w.generation());
        assert!(w.state().is_loading());
    }

    #[tokio::test]
    async fn location_value_is_sent_verbatim() {
        let source = ScriptedSource::new(online("m"));
        let mut w = widget("https://example.com/status?username=%20steve%20");

        let (generation, outcome) = execute(&source, w.mount().unwrap()).await;
        assert!(w.complete(generation, outcome));

        assert_eq!(source.calls(), vec![" steve ".to_string()]);
    }

    #[tokio::test]
    async fn one_request_per_mount() {
        let source = ScriptedSource::new(online("m"));
        let mut w = widget("https://example.com/status?username=steve");

        let (generation, outcome) = execute(&source, w.mount().unwrap()).await;
        assert!(w.complete(generation, outcome));

        assert_eq!(source.calls(), vec!["steve".to_string()]);
        assert_eq!(
            w.state(),
            &ViewState::Resolved(StatusReport {
                server_state: ServerState::Online,
                message: "m".to_string()
            })
        );
    }

    #[tokio::test]
    async fn offline_message_shown_verbatim() {
        let source = ScriptedSource::new(Ok(StatusResponse {
            status: ServerState::Offline,
            message: "m2".to_string(),
            error: None,
        }));
        let mut w = widget("https://example.com/status?username=steve");
        let (generation, outcome) = execute(&source, w.mount().unwrap()).await;
        w.complete(generation, outcome);

        match w.state() {
            ViewState::Resolved(report) => {
                assert_eq!(report.server_state, ServerState::Offline);
                assert_eq!(report.message, "m2");
            }
            other => panic!("expected resolved, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn retry_after_error_requeries_same_identifier() {
        let source = ScriptedSource::new(Err(StatusError::Transport("refused".into())));
        let mut w = widget("https://example.com/status?username=steve");
        let before = w.location().clone();

        let (generation, outcome) = execute(&source, w.mount().unwrap()).await;
        w.complete(generation, outcome);
        assert!(matches!(w.state(), ViewState::Failed(StatusError::Transport(_))));

        let query = w.retry().unwrap();
        assert!(w.state().is_loading(), "retry must clear the old error first");
        let (generation, outcome) = execute(&source, query).await;
        w.complete(generation, outcome);

        assert_eq!(source.calls(), vec!["steve", "steve"]);
        assert_eq!(w.location(), &before);
        assert!(matches!(w.state(), ViewState::Failed(_)));
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut w = widget("https://example.com/status?username=steve");
        let first = w.mount().unwrap();
        let second = w.retry().unwrap();
        assert!(second.generation > first.generation);

        // Late answer for the first attempt arrives after the retry went out
        assert!(!w.complete(first.generation, online("stale")));
        assert!(w.state().is_loading());

        assert!(w.complete(
            second.generation,
            Err(StatusError::Server {
                status: 500,
                message: Some("boom".into())
            })
        ));
        // And again after the newer attempt has settled
        assert!(!w.complete(first.generation, online("stale")));
        assert!(matches!(w.state(), ViewState::Failed(StatusError::Server { .. })));
    }

    #[test]
    fn duplicate_outcome_for_settled_attempt_is_ignored() {
        let mut w = widget("https://example.com/status?username=steve");
        let q = w.mount().unwrap();
        assert!(w.complete(q.generation, online("m")));
        assert!(!w.complete(q.generation, online("again")));
        match w.state() {
            ViewState::Resolved(report) => assert_eq!(report.message, "m"),
            other => panic!("expected resolved, got {:?}", other),
        }
    }

    #[test]
    fn submit_rewrites_location_and_remounts() {
        let mut w = widget("https://example.com/status?username=steve");
        let old = w.mount().unwrap();
        w.complete(old.generation, online("m"));

        let query = w.submit("  alex  ").unwrap();
        assert_eq!(query.identifier, "alex");
        assert_eq!(w.identifier(), Some("alex"));
        assert_eq!(w.location().identifier().as_deref(), Some("alex"));
        assert!(w.state().is_loading(), "old result must be cleared");

        // The old attempt's continuation no longer applies
        assert!(!w.complete(old.generation, online("stale")));
    }

    #[test]
    fn submit_blank_input_is_ignored() {
        let mut w = widget("https://example.com/status?username=steve");
        let q = w.mount().unwrap();
        w.complete(q.generation, online("m"));
        let generation = w.generation();

        assert_eq!(w.submit("   "), None);
        assert_eq!(w.generation(), generation);
        assert_eq!(w.identifier(), Some("steve"));
        assert!(matches!(w.state(), ViewState::Resolved(_)));
    }

    #[test]
    fn submit_recovers_from_missing_identifier() {
        let mut w = widget("https://example.com/status?ref=docs");
        assert_eq!(w.mount(), None);

        let query = w.submit("steve").unwrap();
        assert_eq!(query.identifier, "steve");
        assert!(w.location().as_str().contains("ref=docs"));
    }

    #[tokio::test]
    async fn repeating_same_query_is_idempotent() {
        let source = ScriptedSource::new(online("m"));
        let mut w = widget("https://example.com/status?username=steve");

        let (g, o) = execute(&source, w.mount().unwrap()).await;
        w.complete(g, o);
        let first = w.state().clone();

        let (g, o) = execute(&source, w.retry().unwrap()).await;
        w.complete(g, o);

        assert_eq!(w.state(), &first);
        assert_eq!(source.calls().len(), 2);
    }
}
