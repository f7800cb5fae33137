//! Fraud Detector SDK
//!
//! Typed requests, results and a transport-agnostic client for the Fraud
//! Detector service.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod operations;
pub mod transport;

// Re-export main types
pub use builder::FraudDetectorClientBuilder;
pub use client::{FraudDetectorClient, Paginator};
pub use config::ClientConfig;
pub use error::{Result, SdkError};
pub use operation::{Operation, Paginated, PaginatedOperation};
pub use transport::{ServiceErrorKind, Transport, TransportError};

// Re-export the data model crate
pub use frauddetector_core;
pub use frauddetector_core::{Validate, ValidationError};
