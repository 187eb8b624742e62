//! Error types for the pdimage service.

use pdimage_search::SearchError;

/// Top-level error type for the image search service.
///
/// Only startup can fail: once the server is running, every search answers
/// `200` with best-effort results.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The search pipeline could not be built.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// HTTP listener bind or serve error.
    #[error("server error: {0}")]
    Server(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ServiceError>;
