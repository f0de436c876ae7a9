//! Catalog error types

use std::time::Duration;

use bistro_client::ClientError;
use shared::ErrorKind;
use thiserror::Error;

/// Catalog error type
///
/// Cloneable so a form can keep the last failure next to its draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Request could not complete
    #[error("Network failure: {0}")]
    Network(String),

    /// Request exceeded the configured bound
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server answered with a non-success status
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Success status with an unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side constraint failed; no request was issued
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Operation not allowed in the current form/load state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl CatalogError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => ErrorKind::NetworkFailure,
            Self::Rejected { .. } | Self::InvalidResponse(_) => ErrorKind::ServerRejection,
            Self::Validation { .. } | Self::InvalidState(_) => ErrorKind::ValidationFailure,
        }
    }
}

impl From<ClientError> for CatalogError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { status, message } => Self::Rejected { status, message },
            ClientError::InvalidResponse(msg) => Self::InvalidResponse(msg),
            ClientError::Serialization(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_error_keeps_kind() {
        let cases = [
            ClientError::Connection("refused".into()),
            ClientError::Timeout("deadline".into()),
            ClientError::Rejected {
                status: 500,
                message: "boom".into(),
            },
            ClientError::InvalidResponse("truncated".into()),
            ClientError::Config("Failed to create multipart: bad mime".into()),
        ];
        for err in cases {
            let kind = err.kind();
            assert_eq!(CatalogError::from(err).kind(), kind);
        }
    }

    #[test]
    fn test_unbuildable_request_is_not_validation() {
        let err = CatalogError::from(ClientError::Config("bad mime".into()));
        assert!(matches!(err, CatalogError::Network(_)));
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    }

    #[test]
    fn test_rejection_carries_status() {
        let err = CatalogError::from(ClientError::Rejected {
            status: 409,
            message: "exists".into(),
        });
        assert_eq!(
            err,
            CatalogError::Rejected {
                status: 409,
                message: "exists".into()
            }
        );
    }

    #[test]
    fn test_validation_display() {
        let err = CatalogError::validation("price", "must be a number");
        assert_eq!(err.to_string(), "Invalid price: must be a number");
        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
        assert_eq!(
            CatalogError::Timeout(Duration::from_millis(50)).kind(),
            ErrorKind::NetworkFailure
        );
    }
}
