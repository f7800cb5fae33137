//! Scoring model and model version operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::{
    LabelSchema, Model, ModelVariable, ModelVersion, ModelVersionDetail, TrainingDataSource,
};
use frauddetector_core::types::{ModelTypeEnum, ModelVersionStatus};
use frauddetector_core::validation::{
    check_description, check_identifier, check_length, check_optional, check_pattern, reject,
    Pattern, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `GetModels`
pub const GET_MODELS_MAX_RESULTS: (i32, i32) = (1, 10);
/// Page size bounds for `DescribeModelVersions`
pub const DESCRIBE_MODEL_VERSIONS_MAX_RESULTS: (i32, i32) = (1, 10);

fn check_version_number(value: &str) -> Result<(), ValidationError> {
    check_pattern("modelVersionNumber", value, Pattern::ModelVersionNumber)
}

// =============================================================================
// PutModel
// =============================================================================

/// Create or update a model definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutModelRequest {
    pub model_id: String,
    pub model_type: ModelTypeEnum,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub training_data_source: TrainingDataSource,
    pub model_variables: Vec<ModelVariable>,
    pub label_schema: LabelSchema,
}

impl PutModelRequest {
    pub fn new(
        model_id: impl Into<String>,
        model_type: ModelTypeEnum,
        training_data_source: TrainingDataSource,
        label_schema: LabelSchema,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_type,
            description: None,
            training_data_source,
            model_variables: Vec::new(),
            label_schema,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_model_variable(mut self, variable: ModelVariable) -> Self {
        self.model_variables.push(variable);
        self
    }
}

impl Validate for PutModelRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelId", &self.model_id)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        self.training_data_source.validate()?;
        check_length("modelVariables", self.model_variables.len(), 1, usize::MAX)?;
        self.model_variables.validate()?;
        self.label_schema.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutModelResult {}

operation!(PutModelRequest => PutModelResult, "PutModel");

// =============================================================================
// GetModels
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeEnum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetModelsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_type(mut self, model_type: ModelTypeEnum) -> Self {
        self.model_type = Some(model_type);
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for GetModelsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.model_id.as_deref(), |id| check_identifier("modelId", id))?;
        check_max_results(self.max_results, GET_MODELS_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelsResult {
    #[serde(default)]
    pub models: Vec<Model>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetModelsRequest => GetModelsResult, "GetModels");
paginated!(GetModelsRequest => GetModelsResult, Model, models);

// =============================================================================
// CreateModelVersion
// =============================================================================

/// Start training a new version of a model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelVersionRequest {
    pub model_id: String,
    pub model_type: ModelTypeEnum,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateModelVersionRequest {
    pub fn new(model_id: impl Into<String>, model_type: ModelTypeEnum) -> Self {
        Self {
            model_id: model_id.into(),
            model_type,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for CreateModelVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelId", &self.model_id)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelVersionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeEnum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelVersionStatus>,
}

impl CreateModelVersionResult {
    /// Reference to the new version, once all of its parts are known
    pub fn model_version(&self) -> Option<ModelVersion> {
        Some(ModelVersion::new(
            self.model_id.clone()?,
            self.model_type?,
            self.model_version_number.clone()?,
        ))
    }
}

operation!(CreateModelVersionRequest => CreateModelVersionResult, "CreateModelVersion");

// =============================================================================
// GetModelVersion
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelVersionRequest {
    pub model_id: String,
    pub model_type: ModelTypeEnum,
    pub model_version_number: String,
}

impl GetModelVersionRequest {
    pub fn new(
        model_id: impl Into<String>,
        model_type: ModelTypeEnum,
        model_version_number: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_type,
            model_version_number: model_version_number.into(),
        }
    }
}

impl From<ModelVersion> for GetModelVersionRequest {
    fn from(version: ModelVersion) -> Self {
        Self {
            model_id: version.model_id,
            model_type: version.model_type,
            model_version_number: version.model_version_number,
        }
    }
}

impl Validate for GetModelVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelId", &self.model_id)?;
        check_version_number(&self.model_version_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelVersionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeEnum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelVersionStatus>,
}

operation!(GetModelVersionRequest => GetModelVersionResult, "GetModelVersion");

// =============================================================================
// DescribeModelVersions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeModelVersionsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeEnum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeModelVersionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_model_version_number(mut self, number: impl Into<String>) -> Self {
        self.model_version_number = Some(number.into());
        self
    }

    pub fn with_model_type(mut self, model_type: ModelTypeEnum) -> Self {
        self.model_type = Some(model_type);
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for DescribeModelVersionsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.model_id.as_deref(), |id| check_identifier("modelId", id))?;
        check_optional(self.model_version_number.as_deref(), check_version_number)?;
        check_max_results(self.max_results, DESCRIBE_MODEL_VERSIONS_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeModelVersionsResult {
    #[serde(default)]
    pub model_version_details: Vec<ModelVersionDetail>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(DescribeModelVersionsRequest => DescribeModelVersionsResult, "DescribeModelVersions");
paginated!(
    DescribeModelVersionsRequest => DescribeModelVersionsResult,
    ModelVersionDetail,
    model_version_details
);

// =============================================================================
// UpdateModelVersion
// =============================================================================

/// Activate a trained model version, or take an active one back to
/// `TRAINING_COMPLETE`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModelVersionRequest {
    pub model_id: String,
    pub model_type: ModelTypeEnum,
    pub model_version_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: ModelVersionStatus,
}

impl UpdateModelVersionRequest {
    pub fn new(version: ModelVersion, status: ModelVersionStatus) -> Self {
        Self {
            model_id: version.model_id,
            model_type: version.model_type,
            model_version_number: version.model_version_number,
            description: None,
            status,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for UpdateModelVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelId", &self.model_id)?;
        check_version_number(&self.model_version_number)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        if !self.status.is_requestable() {
            return reject(ValidationError::InvalidEnumValue {
                field: "status".to_string(),
                value: self.status.to_string(),
                allowed: "ACTIVE, TRAINING_COMPLETE".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateModelVersionResult {}

operation!(UpdateModelVersionRequest => UpdateModelVersionResult, "UpdateModelVersion");
