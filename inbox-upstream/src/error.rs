//! Error types for the upstream client crate.

/// Errors that can occur while talking to the Tinyhost API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// Tinyhost answered with a non-success status.
    #[error("Tinyhost returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never got an answer (DNS, connect, TLS, reading the body).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body is not JSON.
    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot carry path segments.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
