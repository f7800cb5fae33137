//! Configuration types for FraudDetectorClient

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "frauddetector.us-east-1.amazonaws.com";
/// Default signing region
pub const DEFAULT_REGION: &str = "us-east-1";
/// Prefix joined with an operation name to form its target
pub const DEFAULT_TARGET_PREFIX: &str = "AWSHawksNestServiceFacade";
/// Default page budget for [`collect_pages`](crate::client::FraudDetectorClient::collect_pages)
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "FRAUD_DETECTOR_ENDPOINT";
/// Environment variable overriding the region
pub const ENV_REGION: &str = "FRAUD_DETECTOR_REGION";

/// Client configuration
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```yaml
/// region: eu-west-1
/// endpoint: frauddetector.eu-west-1.amazonaws.com
/// max_pages: 20
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host the transport should send requests to
    pub endpoint: String,

    /// Region used by the transport for signing
    pub region: String,

    /// Target prefix, e.g. `AWSHawksNestServiceFacade`
    pub target_prefix: String,

    /// Upper bound on pages fetched by one paginated listing
    pub max_pages: usize,
}

impl ClientConfig {
    /// Create a configuration with the service defaults
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            region: DEFAULT_REGION.to_string(),
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Parse a YAML document; absent keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Load a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded client config from {:?}", path);
        Self::from_yaml_str(&content)
    }

    /// Apply `FRAUD_DETECTOR_ENDPOINT` and `FRAUD_DETECTOR_REGION` when set
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`; empty values are ignored
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            tracing::debug!("Endpoint overridden by {}: {}", ENV_ENDPOINT, endpoint);
            self.endpoint = endpoint;
        }
        if let Some(region) = lookup(ENV_REGION).filter(|v| !v.is_empty()) {
            tracing::debug!("Region overridden by {}: {}", ENV_REGION, region);
            self.region = region;
        }
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set target prefix
    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Set page budget
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Full target for an operation, e.g. `AWSHawksNestServiceFacade.GetRules`
    pub fn target_for(&self, operation: &str) -> String {
        format!("{}.{}", self.target_prefix, operation)
    }

    /// Reject configurations no transport could use
    pub fn check(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(SdkError::Config("endpoint must not be empty".to_string()));
        }
        if self.region.trim().is_empty() {
            return Err(SdkError::Config("region must not be empty".to_string()));
        }
        if self.target_prefix.trim().is_empty() {
            return Err(SdkError::Config("target_prefix must not be empty".to_string()));
        }
        if self.max_pages == 0 {
            return Err(SdkError::Config("max_pages must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "frauddetector.us-east-1.amazonaws.com");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.target_for("GetDetectors"), "AWSHawksNestServiceFacade.GetDetectors");
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ClientConfig::from_yaml_str("region: eu-west-1\nmax_pages: 5\n").unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.max_pages, 5);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.target_prefix, DEFAULT_TARGET_PREFIX);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientConfig::from_yaml_str("max_pages: many").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));

        let err = ClientConfig::from_yaml_str("max_pages: 0").unwrap_err();
        assert!(err.to_string().contains("max_pages"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "localhost:8443"),
            (ENV_REGION, ""),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::new()
            .with_region("ap-southeast-2")
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.endpoint, "localhost:8443");
        assert_eq!(config.region, "ap-southeast-2");
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_endpoint("frauddetector.eu-west-1.amazonaws.com")
            .with_target_prefix("Facade")
            .with_max_pages(3);
        assert_eq!(config.target_for("PutOutcome"), "Facade.PutOutcome");
        assert_eq!(config.max_pages, 3);
    }
}
