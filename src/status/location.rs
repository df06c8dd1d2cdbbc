//! Page location: the URL whose `username` parameter drives the widget

use anyhow::{Context, Result};
use reqwest::Url;
use std::fmt;

/// Query parameter carrying the identifier to look up
pub const IDENTIFIER_PARAM: &str = "username";

/// The status page URL
///
/// Only `username` is read; any other query parameters ride along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).with_context(|| format!("Invalid page location '{}'", input))?;
        Ok(Self { url })
    }

    /// The identifier to check, if present and non-empty
    ///
    /// The value is returned exactly as decoded from the query. Trimming
    /// applies only to typed input (see `StatusWidget::submit`).
    pub fn identifier(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == IDENTIFIER_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }

    /// Rewrite the query so `username` carries `identifier`
    ///
    /// Existing `username` pairs are dropped; other pairs keep their order.
    pub fn set_identifier(&mut self, identifier: &str) {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(key, _)| key != IDENTIFIER_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = self.url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(IDENTIFIER_PARAM, identifier);
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
