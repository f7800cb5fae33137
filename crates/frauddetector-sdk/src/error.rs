//! SDK error types

use crate::transport::{ServiceErrorKind, TransportError};
use frauddetector_core::{CoreError, ValidationError};
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Request failed a client-side constraint and was not sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request or response body could not be converted
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The service rejected the request
    #[error("Service error ({kind}): {message}")]
    Service {
        kind: ServiceErrorKind,
        message: String,
    },

    /// The transport could not deliver the request
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A listing did not finish within the configured page budget
    #[error("Pagination for {operation} stopped after {pages} pages")]
    PageLimitExceeded {
        operation: &'static str,
        pages: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// Throttling and internal server errors may succeed on a later attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Service { kind, .. } => kind.is_retryable(),
            _ => false,
        }
    }

    /// Service error category, when the service answered
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            SdkError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<TransportError> for SdkError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Service { kind, message } => SdkError::Service { kind, message },
            TransportError::Connection(message) => SdkError::Transport(message),
        }
    }
}

impl From<CoreError> for SdkError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => SdkError::Validation(e),
            CoreError::Serialization(e) => SdkError::Serialization(e),
        }
    }
}

impl From<serde_yaml::Error> for SdkError {
    fn from(err: serde_yaml::Error) -> Self {
        SdkError::Config(err.to_string())
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = SdkError::Config("missing endpoint".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("missing endpoint"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let error: SdkError = ValidationError::MissingField {
            field: "detectorId".to_string(),
        }
        .into();
        assert!(matches!(error, SdkError::Validation(_)));
        assert!(error.to_string().contains("detectorId"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_transport_error_conversion() {
        let error: SdkError =
            TransportError::service(ServiceErrorKind::Throttling, "Rate exceeded").into();
        assert_eq!(error.service_kind(), Some(ServiceErrorKind::Throttling));
        assert!(error.is_retryable());
        assert_eq!(
            error.to_string(),
            "Service error (ThrottlingException): Rate exceeded"
        );

        let error: SdkError = TransportError::Connection("timed out".to_string()).into();
        assert!(matches!(error, SdkError::Transport(ref m) if m == "timed out"));
        assert_eq!(error.service_kind(), None);
    }

    #[test]
    fn test_conflict_not_retryable() {
        let error = SdkError::Service {
            kind: ServiceErrorKind::Conflict,
            message: "rule version is in use".to_string(),
        };
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_page_limit_message() {
        let error = SdkError::PageLimitExceeded {
            operation: "GetRules",
            pages: 3,
        };
        assert_eq!(error.to_string(), "Pagination for GetRules stopped after 3 pages");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::Config("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Config"));
    }
}
