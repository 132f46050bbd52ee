// src/core/net.rs

// Blocking HTTP(S) GET for summary files.

use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code} for {url}")]
    Status { url: String, code: u16 },
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }
}

/// Anything that can turn a URL into a response body.
/// The scrape loop only talks to this, so tests can feed canned summaries.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by a `ureq` agent.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// `timeout` bounds each whole request; `None` leaves it unbounded.
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();
        Self { agent: config.into() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|err| map_ureq_error(url, err))?;

        response
            .into_body()
            .read_to_string()
            .map_err(|err| map_ureq_error(url, err))
    }
}

fn map_ureq_error(url: &str, err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(code) => FetchError::Status { url: s!(url), code },
        other => FetchError::Transport { url: s!(url), reason: other.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_status_variant() {
        let e = map_ureq_error("https://x/T1.txt", ureq::Error::StatusCode(404));
        assert!(matches!(e, FetchError::Status { code: 404, .. }));
        assert_eq!(e.url(), "https://x/T1.txt");
        assert_eq!(e.to_string(), "HTTP 404 for https://x/T1.txt");
    }

    #[test]
    fn other_errors_map_to_transport() {
        let e = map_ureq_error("https://x/T1.txt", ureq::Error::ConnectionFailed);
        assert!(matches!(e, FetchError::Transport { .. }));
    }
}
