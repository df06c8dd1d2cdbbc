//! Test double for `StatusSource`

use super::{StatusError, StatusResponse, StatusSource};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Mutex;

/// Records identifiers and answers with a canned outcome
pub struct ScriptedSource {
    calls: Mutex<Vec<String>>,
    outcome: Result<StatusResponse, StatusError>,
}

impl ScriptedSource {
    pub fn new(outcome: Result<StatusResponse, StatusError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome,
        }
    }

    /// Identifiers fetched so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl StatusSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn fetch(&self, identifier: String) -> BoxFuture<'_, Result<StatusResponse, StatusError>> {
        self.calls.lock().unwrap().push(identifier);
        let outcome = self.outcome.clone();
        async move { outcome }.boxed()
    }
}
