//! Error types for the Fraud Detector data model

use thiserror::Error;

/// A client-side constraint violation, raised before any request is sent.
///
/// Every variant names the offending field and the constraint it broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is empty, too long, or contains characters outside `[0-9a-z_-]`
    #[error("Invalid identifier for field '{field}': '{value}' must be 1-64 characters matching ^[0-9a-z_-]+$")]
    InvalidIdentifier { field: String, value: String },

    /// Description length outside 1-128 characters
    #[error("Invalid description for field '{field}': length {length} is outside 1-128")]
    InvalidDescription { field: String, length: usize },

    /// Rule expression length outside 1-4096 characters
    #[error("Invalid expression for field '{field}': length {length} is outside 1-4096")]
    InvalidExpression { field: String, length: usize },

    /// Value does not match the field's pattern
    #[error("Invalid value for field '{field}': '{value}' does not match {pattern}")]
    InvalidPattern {
        field: String,
        value: String,
        pattern: String,
    },

    /// String or collection length outside the allowed bounds
    #[error("Invalid length for field '{field}': {length} is outside {min}-{max}")]
    InvalidLength {
        field: String,
        length: usize,
        min: usize,
        max: usize,
    },

    /// Literal is not one of the enumeration's values
    #[error("Invalid value for {field}: '{value}' is not one of [{allowed}]")]
    InvalidEnumValue {
        field: String,
        value: String,
        allowed: String,
    },

    /// Numeric value outside the operation's range
    #[error("Invalid range for field '{field}': {value} is outside {min}-{max}")]
    InvalidRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A map key was inserted twice
    #[error("Duplicate key for field '{field}': '{key}' is already present")]
    DuplicateKey { field: String, key: String },

    /// Required field is absent
    #[error("Required field missing: {field}")]
    MissingField { field: String },

    /// Field is set where the surrounding configuration forbids it
    #[error("Unexpected field '{field}': {reason}")]
    UnexpectedField { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidIdentifier { field, .. }
            | ValidationError::InvalidDescription { field, .. }
            | ValidationError::InvalidExpression { field, .. }
            | ValidationError::InvalidPattern { field, .. }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidEnumValue { field, .. }
            | ValidationError::InvalidRange { field, .. }
            | ValidationError::DuplicateKey { field, .. }
            | ValidationError::MissingField { field }
            | ValidationError::UnexpectedField { field, .. } => field,
        }
    }
}

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
