//! Error types for the pdimage-search crate.
//!
//! Provider errors never reach the HTTP caller: the aggregator turns them
//! into empty contributions. They exist so failures can be logged with a
//! reason instead of being swallowed.

/// Errors that can occur while querying an upstream archive or building
/// the search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request could not be sent or the archive answered with a
    /// non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The archive did not answer within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The archive's response body was not JSON of the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Classify a [`reqwest::Error`] raised while talking to `provider`.
    pub(crate) fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{provider}: {err}"))
        } else if err.is_decode() {
            Self::Parse(format!("{provider} response decode failed: {err}"))
        } else {
            Self::Http(format!("{provider} request failed: {err}"))
        }
    }
}

/// Convenience type alias for pdimage-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
