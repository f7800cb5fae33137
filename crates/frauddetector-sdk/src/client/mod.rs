//! FraudDetectorClient - typed access to every service operation
//!
//! # Architecture
//!
//! The module is organized into:
//! - `dispatch`: `FraudDetectorClient` and the generic `send` path
//! - `operations`: one named method per service operation
//! - `paginator`: `nextToken` continuation for listing operations
//! - `tests`: Unit tests (test-only)

mod dispatch;
mod operations;
mod paginator;

pub use dispatch::FraudDetectorClient;
pub use paginator::Paginator;

#[cfg(test)]
mod tests;
