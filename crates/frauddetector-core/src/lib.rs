//! Fraud Detector Core - data model for the Fraud Detector service
//!
//! This crate provides the record types exchanged with the service:
//! - Closed vocabularies (statuses, data types, formats)
//! - Value objects (rules, outcomes, models, external models, variables)
//! - Client-side constraint checks run before a request is sent
//! - Duplicate-key-safe map building
//! - Error types

pub mod encoding;
pub mod error;
pub mod map;
pub mod model;
pub mod types;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use error::{CoreError, ValidationError};
pub use validation::Validate;
