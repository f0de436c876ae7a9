//! Client error types

use shared::ErrorKind;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Could not reach the server
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server answered with a non-success status
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client setup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            // A request that could not be built never reached the server
            Self::Http(_) | Self::Connection(_) | Self::Timeout(_) | Self::Config(_) => {
                ErrorKind::NetworkFailure
            }
            Self::Rejected { status, .. } => {
                ErrorKind::from_status(*status).unwrap_or(ErrorKind::ServerRejection)
            }
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorKind::ServerRejection,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
