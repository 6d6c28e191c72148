//! Provider error hierarchy.
//!
//! Provider-aware status mapping (401→Unauthorized, 429→RateLimited,
//! 5xx→Server, etc.); transport failures are split into timeout vs network.

use thiserror::Error;

/// Convenient alias for provider results.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Search-provider failure. Fatal for the triggering invocation; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Unauthorized (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// Forbidden (HTTP 403) — also GitHub's unauthenticated rate-limit reply.
    #[error("forbidden")]
    Forbidden,

    /// Not found (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Gateway/Server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other HTTP status not covered above.
    #[error("http status error: {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Network/transport failure without status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid client configuration (bad token bytes, bad base URL).
    #[error("provider config error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Maps a non-success HTTP status to a typed error.
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            s if (500..600).contains(&s) => Self::Server(s),
            s => Self::HttpStatus(s),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::Network(err.to_string())
        }
    }
}
