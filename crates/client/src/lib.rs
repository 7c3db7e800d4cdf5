//! HTTP client for the Metr API.
//!
//! Implements the synchronization contract the UI relies on:
//!
//! - every mutation holds a per-project in-flight permit, so a double
//!   submission on the same project is rejected with [`error::ClientError::Busy`]
//!   while unrelated projects mutate concurrently;
//! - after a successful mutation the client discards local state and
//!   refetches the full project collection, trusting the server as the
//!   single source of truth (no optimistic patching);
//! - server error messages are surfaced verbatim, never retried.

pub mod error;
pub mod guard;
pub mod projects;

use guard::InFlightSet;

/// Client for the Metr API.
///
/// Cheap to clone; clones share the in-flight set.
#[derive(Debug, Clone)]
pub struct MetrClient {
    http: reqwest::Client,
    base_url: String,
    in_flight: InFlightSet,
}

impl MetrClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            in_flight: InFlightSet::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }
}
