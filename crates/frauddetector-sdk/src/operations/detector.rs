//! Detector and detector version operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::{Detector, DetectorVersionSummary, ModelVersion, Rule};
use frauddetector_core::types::{DetectorVersionStatus, RuleExecutionMode};
use frauddetector_core::validation::{
    check_description, check_identifier, check_length, check_optional, check_pattern, reject,
    Pattern, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `DescribeDetector`
pub const DESCRIBE_DETECTOR_MAX_RESULTS: (i32, i32) = (1000, 2500);
/// Page size bounds for `GetDetectors`
pub const GET_DETECTORS_MAX_RESULTS: (i32, i32) = (5, 10);

fn check_endpoints(endpoints: &[String]) -> Result<(), ValidationError> {
    endpoints
        .iter()
        .try_for_each(|e| check_pattern("externalModelEndpoints", e, Pattern::ModelEndpoint))
}

// =============================================================================
// PutDetector
// =============================================================================

/// Create or update a detector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutDetectorRequest {
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PutDetectorRequest {
    pub fn new(detector_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for PutDetectorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutDetectorResult {}

operation!(PutDetectorRequest => PutDetectorResult, "PutDetector");

// =============================================================================
// DeleteDetector
// =============================================================================

/// Delete a detector; its versions and rule versions must be deleted first
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDetectorRequest {
    pub detector_id: String,
}

impl DeleteDetectorRequest {
    pub fn new(detector_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
        }
    }
}

impl Validate for DeleteDetectorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteDetectorResult {}

operation!(DeleteDetectorRequest => DeleteDetectorResult, "DeleteDetector");

// =============================================================================
// DescribeDetector
// =============================================================================

/// List every version of a detector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeDetectorRequest {
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeDetectorRequest {
    pub fn new(detector_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for DescribeDetectorRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_max_results(self.max_results, DESCRIBE_DETECTOR_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeDetectorResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,

    #[serde(default)]
    pub detector_version_summaries: Vec<DetectorVersionSummary>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(DescribeDetectorRequest => DescribeDetectorResult, "DescribeDetector");
paginated!(DescribeDetectorRequest => DescribeDetectorResult, DetectorVersionSummary, detector_version_summaries);

// =============================================================================
// GetDetectors
// =============================================================================

/// List detectors, or fetch one by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetDetectorsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector_id(mut self, detector_id: impl Into<String>) -> Self {
        self.detector_id = Some(detector_id.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for GetDetectorsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.detector_id.as_deref(), |id| check_identifier("detectorId", id))?;
        check_max_results(self.max_results, GET_DETECTORS_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorsResult {
    #[serde(default)]
    pub detectors: Vec<Detector>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetDetectorsRequest => GetDetectorsResult, "GetDetectors");
paginated!(GetDetectorsRequest => GetDetectorsResult, Detector, detectors);

// =============================================================================
// CreateDetectorVersion
// =============================================================================

/// Create a detector version; it starts in `DRAFT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetectorVersionRequest {
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_model_endpoints: Vec<String>,

    pub rules: Vec<Rule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_versions: Vec<ModelVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_execution_mode: Option<RuleExecutionMode>,
}

impl CreateDetectorVersionRequest {
    pub fn new(detector_id: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            detector_id: detector_id.into(),
            description: None,
            external_model_endpoints: Vec::new(),
            rules,
            model_versions: Vec::new(),
            rule_execution_mode: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_external_model_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.external_model_endpoints.push(endpoint.into());
        self
    }

    pub fn add_model_version(mut self, model_version: ModelVersion) -> Self {
        self.model_versions.push(model_version);
        self
    }

    pub fn with_rule_execution_mode(mut self, mode: RuleExecutionMode) -> Self {
        self.rule_execution_mode = Some(mode);
        self
    }
}

impl Validate for CreateDetectorVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        check_endpoints(&self.external_model_endpoints)?;
        check_length("rules", self.rules.len(), 1, usize::MAX)?;
        self.rules.validate()?;
        self.model_versions.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetectorVersionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_version_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DetectorVersionStatus>,
}

operation!(CreateDetectorVersionRequest => CreateDetectorVersionResult, "CreateDetectorVersion");

// =============================================================================
// GetDetectorVersion
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorVersionRequest {
    pub detector_id: String,
    pub detector_version_id: String,
}

impl GetDetectorVersionRequest {
    pub fn new(detector_id: impl Into<String>, detector_version_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: detector_version_id.into(),
        }
    }
}

impl Validate for GetDetectorVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_pattern("detectorVersionId", &self.detector_version_id, Pattern::VersionId)
    }
}

/// A full detector version snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDetectorVersionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_version_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub external_model_endpoints: Vec<String>,

    #[serde(default)]
    pub model_versions: Vec<ModelVersion>,

    #[serde(default)]
    pub rules: Vec<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DetectorVersionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_execution_mode: Option<RuleExecutionMode>,
}

impl GetDetectorVersionResult {
    /// Execution mode in effect; the service default applies when absent
    pub fn effective_rule_execution_mode(&self) -> RuleExecutionMode {
        self.rule_execution_mode.unwrap_or_default()
    }
}

operation!(GetDetectorVersionRequest => GetDetectorVersionResult, "GetDetectorVersion");

// =============================================================================
// UpdateDetectorVersion
// =============================================================================

/// Replace the rules, models and endpoints of a `DRAFT` detector version
///
/// The service rejects this for `ACTIVE` and `INACTIVE` versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetectorVersionRequest {
    pub detector_id: String,
    pub detector_version_id: String,

    #[serde(default)]
    pub external_model_endpoints: Vec<String>,

    pub rules: Vec<Rule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_versions: Vec<ModelVersion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_execution_mode: Option<RuleExecutionMode>,
}

impl UpdateDetectorVersionRequest {
    pub fn new(
        detector_id: impl Into<String>,
        detector_version_id: impl Into<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: detector_version_id.into(),
            external_model_endpoints: Vec::new(),
            rules,
            description: None,
            model_versions: Vec::new(),
            rule_execution_mode: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_external_model_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.external_model_endpoints.push(endpoint.into());
        self
    }

    pub fn add_model_version(mut self, model_version: ModelVersion) -> Self {
        self.model_versions.push(model_version);
        self
    }

    pub fn with_rule_execution_mode(mut self, mode: RuleExecutionMode) -> Self {
        self.rule_execution_mode = Some(mode);
        self
    }
}

impl Validate for UpdateDetectorVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_pattern("detectorVersionId", &self.detector_version_id, Pattern::VersionId)?;
        check_endpoints(&self.external_model_endpoints)?;
        check_length("rules", self.rules.len(), 1, usize::MAX)?;
        self.rules.validate()?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        self.model_versions.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateDetectorVersionResult {}

operation!(UpdateDetectorVersionRequest => UpdateDetectorVersionResult, "UpdateDetectorVersion");

// =============================================================================
// UpdateDetectorVersionMetadata
// =============================================================================

/// Change the description of a detector version in any status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetectorVersionMetadataRequest {
    pub detector_id: String,
    pub detector_version_id: String,
    pub description: String,
}

impl UpdateDetectorVersionMetadataRequest {
    pub fn new(
        detector_id: impl Into<String>,
        detector_version_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: detector_version_id.into(),
            description: description.into(),
        }
    }
}

impl Validate for UpdateDetectorVersionMetadataRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_pattern("detectorVersionId", &self.detector_version_id, Pattern::VersionId)?;
        check_description("description", &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateDetectorVersionMetadataResult {}

operation!(
    UpdateDetectorVersionMetadataRequest => UpdateDetectorVersionMetadataResult,
    "UpdateDetectorVersionMetadata"
);

// =============================================================================
// UpdateDetectorVersionStatus
// =============================================================================

/// Promote or demote a detector version
///
/// Valid transitions are `DRAFT -> ACTIVE`, `ACTIVE -> INACTIVE` and
/// `INACTIVE -> ACTIVE`, so `DRAFT` is never a valid target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetectorVersionStatusRequest {
    pub detector_id: String,
    pub detector_version_id: String,
    pub status: DetectorVersionStatus,
}

impl UpdateDetectorVersionStatusRequest {
    pub fn new(
        detector_id: impl Into<String>,
        detector_version_id: impl Into<String>,
        status: DetectorVersionStatus,
    ) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: detector_version_id.into(),
            status,
        }
    }
}

impl Validate for UpdateDetectorVersionStatusRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_pattern("detectorVersionId", &self.detector_version_id, Pattern::VersionId)?;
        if !self.status.is_requestable() {
            return reject(ValidationError::InvalidEnumValue {
                field: "status".to_string(),
                value: self.status.to_string(),
                allowed: "ACTIVE, INACTIVE".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateDetectorVersionStatusResult {}

operation!(
    UpdateDetectorVersionStatusRequest => UpdateDetectorVersionStatusResult,
    "UpdateDetectorVersionStatus"
);

// =============================================================================
// DeleteDetectorVersion
// =============================================================================

/// Delete a detector version; `ACTIVE` versions cannot be deleted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDetectorVersionRequest {
    pub detector_id: String,
    pub detector_version_id: String,
}

impl DeleteDetectorVersionRequest {
    pub fn new(detector_id: impl Into<String>, detector_version_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: detector_version_id.into(),
        }
    }
}

impl Validate for DeleteDetectorVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_pattern("detectorVersionId", &self.detector_version_id, Pattern::VersionId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteDetectorVersionResult {}

operation!(DeleteDetectorVersionRequest => DeleteDetectorVersionResult, "DeleteDetectorVersion");
