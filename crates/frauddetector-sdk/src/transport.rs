//! Transport interface
//!
//! The client never talks to the network itself. A [`Transport`] receives the
//! operation target (e.g. `AWSHawksNestServiceFacade.GetDetectors`) and the
//! JSON request body, and returns the JSON response body. Signing, retries,
//! timeouts and connection reuse all live behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error category reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceErrorKind {
    /// Request conflicts with current state, e.g. deleting a rule version an
    /// active detector version still uses
    Conflict,
    InternalServer,
    ResourceNotFound,
    Throttling,
    /// Server-side validation failure
    Validation,
    Unknown,
}

impl ServiceErrorKind {
    /// Classify a service error code such as `ResourceNotFoundException`
    ///
    /// Accepts both the bare name and the namespaced
    /// `com.amazonaws.frauddetector#Name` form.
    pub fn from_code(code: &str) -> Self {
        let name = code.rsplit('#').next().unwrap_or(code);
        let name = name.split(':').next().unwrap_or(name);
        match name.trim_end_matches("Exception") {
            "Conflict" => ServiceErrorKind::Conflict,
            "InternalServer" => ServiceErrorKind::InternalServer,
            "ResourceNotFound" => ServiceErrorKind::ResourceNotFound,
            "Throttling" => ServiceErrorKind::Throttling,
            "Validation" => ServiceErrorKind::Validation,
            _ => ServiceErrorKind::Unknown,
        }
    }

    /// Whether repeating the same request later may succeed
    pub fn is_retryable(self) -> bool {
        matches!(self, ServiceErrorKind::Throttling | ServiceErrorKind::InternalServer)
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceErrorKind::Conflict => "ConflictException",
            ServiceErrorKind::InternalServer => "InternalServerException",
            ServiceErrorKind::ResourceNotFound => "ResourceNotFoundException",
            ServiceErrorKind::Throttling => "ThrottlingException",
            ServiceErrorKind::Validation => "ValidationException",
            ServiceErrorKind::Unknown => "UnknownError",
        };
        f.write_str(name)
    }
}

/// Failure reported by a transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with an error
    #[error("{kind}: {message}")]
    Service {
        kind: ServiceErrorKind,
        message: String,
    },

    /// No usable response was received
    #[error("Connection error: {0}")]
    Connection(String),
}

impl TransportError {
    pub fn service(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        TransportError::Service {
            kind,
            message: message.into(),
        }
    }

    /// Build a service error from a raw error code
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        Self::service(ServiceErrorKind::from_code(code), message)
    }
}

/// Sends one operation and returns the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke `target` with the JSON `body`
    async fn invoke(&self, target: &str, body: Value) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn invoke(&self, target: &str, body: Value) -> Result<Value, TransportError> {
        (**self).invoke(target, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert_eq!(
            ServiceErrorKind::from_code("ResourceNotFoundException"),
            ServiceErrorKind::ResourceNotFound
        );
        assert_eq!(
            ServiceErrorKind::from_code("com.amazonaws.frauddetector#ThrottlingException"),
            ServiceErrorKind::Throttling
        );
        assert_eq!(
            ServiceErrorKind::from_code("ConflictException:http://internal.amazon.com/coral/"),
            ServiceErrorKind::Conflict
        );
        assert_eq!(
            ServiceErrorKind::from_code("AccessDeniedException"),
            ServiceErrorKind::Unknown
        );
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(ServiceErrorKind::Throttling.is_retryable());
        assert!(ServiceErrorKind::InternalServer.is_retryable());
        assert!(!ServiceErrorKind::Validation.is_retryable());
        assert!(!ServiceErrorKind::Conflict.is_retryable());
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::from_code("ValidationException", "detectorId is invalid");
        assert_eq!(err.to_string(), "ValidationException: detectorId is invalid");

        let err = TransportError::Connection("reset by peer".to_string());
        assert!(err.to_string().contains("reset by peer"));
    }
}
