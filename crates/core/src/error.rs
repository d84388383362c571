//! Unified error types for creations-stats.
//!
//! Extraction itself never fails: missing or garbled stats resolve to null
//! fields, not errors. These variants cover the glue around it — URL
//! validation, HTTP transport, and the CSV sink.

/// Unified error types for the creations-stats pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid URL (unparseable, or missing the creation id/slug segment).
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// URL host is not the configured creations host.
    #[error("UNEXPECTED_DOMAIN: {0}")]
    UnexpectedDomain(String),

    /// HTTP error response or network failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Fetch response too large.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// CSV sink I/O failure.
    #[error("SINK_ERROR: {0}")]
    Io(#[from] std::io::Error),
}
