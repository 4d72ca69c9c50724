//! Error taxonomy for the search pipeline.

use thiserror::Error;

/// Failure of a single search attempt. Zero results is not an error; callers
/// see an empty list instead.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Curl reported a transport failure (DNS, connect, TLS, read).
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    /// Response status was not 200.
    #[error("failed to fetch emojis: status {0}")]
    Status(u32),
    /// The document-query selector could not be compiled.
    #[error("invalid selector: {0}")]
    Selector(String),
    /// Configuration rejected before any request was made.
    #[error("invalid config: {0}")]
    Config(String),
}
