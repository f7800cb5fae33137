//! Core FraudDetectorClient implementation

use crate::config::ClientConfig;
use crate::error::{Result, SdkError};
use crate::operation::Operation;
use crate::transport::Transport;
use frauddetector_core::wire::{from_wire, to_wire};
use std::sync::Arc;

/// Client for the Fraud Detector service
///
/// Validates each request locally, hands the JSON body to its [`Transport`]
/// and decodes the typed result. Cloning is cheap; clones share the
/// transport.
pub struct FraudDetectorClient<T: Transport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T: Transport> FraudDetectorClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self::from_shared(config, Arc::new(transport))
    }

    /// Create a client over a transport shared with other owners
    pub fn from_shared(config: ClientConfig, transport: Arc<T>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one operation
    ///
    /// Validation failures are returned before the transport is touched.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Output> {
        let body = match to_wire(request) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Rejected {} before sending: {}", O::NAME, e);
                return Err(e.into());
            }
        };

        let target = self.config.target_for(O::NAME);
        tracing::debug!(operation = O::NAME, "Invoking {}", target);

        let response = match self.transport.invoke(&target, body).await {
            Ok(response) => response,
            Err(e) => {
                let err = SdkError::from(e);
                tracing::warn!(operation = O::NAME, "{} failed: {}", target, err);
                return Err(err);
            }
        };

        Ok(from_wire(response)?)
    }
}

impl<T: Transport> Clone for FraudDetectorClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> std::fmt::Debug for FraudDetectorClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FraudDetectorClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
