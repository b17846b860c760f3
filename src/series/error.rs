//! Fetch error types
//!
//! Every way a series request can fail collapses into [`FetchError`]. The
//! variant is kept for diagnostics only; callers treat them all the same.

use thiserror::Error;

/// Failure to obtain a series from the remote API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network unreachable, connection refused, request aborted
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body could not be read as a series
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Result type alias for series fetches
pub type FetchResult<T> = Result<T, FetchError>;
