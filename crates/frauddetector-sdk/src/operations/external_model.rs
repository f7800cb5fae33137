//! External model endpoint operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::{
    ExternalModel, ModelInputConfiguration, ModelOutputConfiguration, Role,
};
use frauddetector_core::types::{ModelEndpointStatus, ModelSource};
use frauddetector_core::validation::{check_optional, check_pattern, Pattern, Validate};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `GetExternalModels`
pub const GET_EXTERNAL_MODELS_MAX_RESULTS: (i32, i32) = (5, 10);

// =============================================================================
// PutExternalModel
// =============================================================================

/// Register or update an externally hosted endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutExternalModelRequest {
    pub model_endpoint: String,
    pub model_source: ModelSource,
    pub role: Role,
    pub input_configuration: ModelInputConfiguration,
    pub output_configuration: ModelOutputConfiguration,
    pub model_endpoint_status: ModelEndpointStatus,
}

impl PutExternalModelRequest {
    pub fn new(
        model_endpoint: impl Into<String>,
        role: Role,
        input_configuration: ModelInputConfiguration,
        output_configuration: ModelOutputConfiguration,
    ) -> Self {
        Self {
            model_endpoint: model_endpoint.into(),
            model_source: ModelSource::Sagemaker,
            role,
            input_configuration,
            output_configuration,
            model_endpoint_status: ModelEndpointStatus::Associated,
        }
    }

    pub fn with_model_endpoint_status(mut self, status: ModelEndpointStatus) -> Self {
        self.model_endpoint_status = status;
        self
    }
}

impl Validate for PutExternalModelRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_pattern("modelEndpoint", &self.model_endpoint, Pattern::ModelEndpoint)?;
        self.role.validate()?;
        self.input_configuration.validate()?;
        self.output_configuration.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutExternalModelResult {}

operation!(PutExternalModelRequest => PutExternalModelResult, "PutExternalModel");

// =============================================================================
// GetExternalModels
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetExternalModelsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetExternalModelsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_endpoint(mut self, model_endpoint: impl Into<String>) -> Self {
        self.model_endpoint = Some(model_endpoint.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for GetExternalModelsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.model_endpoint.as_deref(), |e| {
            check_pattern("modelEndpoint", e, Pattern::ModelEndpoint)
        })?;
        check_max_results(self.max_results, GET_EXTERNAL_MODELS_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetExternalModelsResult {
    #[serde(default)]
    pub external_models: Vec<ExternalModel>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetExternalModelsRequest => GetExternalModelsResult, "GetExternalModels");
paginated!(GetExternalModelsRequest => GetExternalModelsResult, ExternalModel, external_models);
