//! Error kind classification

use serde::{Deserialize, Serialize};

/// Coarse classification of a failed catalog operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request could not complete (unbuildable request, connect error, timeout)
    NetworkFailure,
    /// Non-success response, or a success response with an unusable body
    ServerRejection,
    /// Client-side required/type constraint, checked before submission
    ValidationFailure,
}

impl ErrorKind {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for success statuses (2xx).
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..300 => None,
            _ => Some(Self::ServerRejection),
        }
    }

    /// Get the string name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::NetworkFailure => "network_failure",
            Self::ServerRejection => "server_rejection",
            Self::ValidationFailure => "validation_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
