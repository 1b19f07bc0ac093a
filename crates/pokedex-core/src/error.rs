//! Error types for gateway calls and configuration loading.

use thiserror::Error;

/// Failure talking to the remote data API.
///
/// A lookup miss is not an error: it is reported as
/// [`LookupOutcome::NotFound`](crate::gateway::LookupOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("JSON parse error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Configuration is malformed or out of range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
