//! Builder pattern for FraudDetectorClient

use crate::client::FraudDetectorClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::Transport;
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for FraudDetectorClient
///
/// Settings apply in layers: the config file (or an explicit config, or the
/// defaults), then environment overrides if enabled, then the individual
/// `with_*` settings.
///
/// # Example
///
/// ```rust,ignore
/// use frauddetector_sdk::FraudDetectorClientBuilder;
///
/// let client = FraudDetectorClientBuilder::new()
///     .with_config_file("frauddetector.yaml")
///     .with_env_overrides(true)
///     .with_max_pages(20)
///     .build(my_transport)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FraudDetectorClientBuilder {
    config: Option<ClientConfig>,
    config_file: Option<PathBuf>,
    env_overrides: bool,
    endpoint: Option<String>,
    region: Option<String>,
    target_prefix: Option<String>,
    max_pages: Option<usize>,
}

impl FraudDetectorClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from a YAML file, read when the client is built
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Apply `FRAUD_DETECTOR_ENDPOINT` / `FRAUD_DETECTOR_REGION`
    pub fn with_env_overrides(mut self, enable: bool) -> Self {
        self.env_overrides = enable;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = Some(prefix.into());
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Resolve the layered configuration
    pub fn resolve_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.config_file, &self.config) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(config)) => config.clone(),
            (None, None) => ClientConfig::new(),
        };

        if self.env_overrides {
            config = config.with_env_overrides();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(prefix) = &self.target_prefix {
            config.target_prefix = prefix.clone();
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }

        config.check()?;
        Ok(config)
    }

    /// Build the client around `transport`
    pub fn build<T: Transport>(self, transport: T) -> Result<FraudDetectorClient<T>> {
        self.build_shared(Arc::new(transport))
    }

    /// Build the client around a shared transport
    pub fn build_shared<T: Transport>(self, transport: Arc<T>) -> Result<FraudDetectorClient<T>> {
        let config = self.resolve_config()?;
        tracing::info!(
            "Fraud Detector client configured for {} ({})",
            config.endpoint,
            config.region
        );
        Ok(FraudDetectorClient::from_shared(config, transport))
    }
}
