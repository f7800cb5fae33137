//! Event evaluation

use frauddetector_core::map::insert_unique;
use frauddetector_core::model::{ModelEndpointDataBlob, ModelScores, RuleResult};
use frauddetector_core::validation::{
    check_identifier, check_optional, check_pattern, check_text, Pattern, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// GetPrediction
// =============================================================================

/// Evaluate an event against a detector version
///
/// Without `detector_version_id` the service uses the detector's active
/// version. Attribute and data blob maps are keyed uniquely; adding a key
/// twice is an error rather than an overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPredictionRequest {
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_version_id: Option<String>,

    pub event_id: String,

    #[serde(default, deserialize_with = "frauddetector_core::map::deserialize_unique")]
    event_attributes: BTreeMap<String, String>,

    #[serde(
        default,
        deserialize_with = "frauddetector_core::map::deserialize_unique",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    external_model_endpoint_data_blobs: BTreeMap<String, ModelEndpointDataBlob>,
}

impl GetPredictionRequest {
    pub fn new(detector_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            detector_version_id: None,
            event_id: event_id.into(),
            event_attributes: BTreeMap::new(),
            external_model_endpoint_data_blobs: BTreeMap::new(),
        }
    }

    pub fn with_detector_version_id(mut self, detector_version_id: impl Into<String>) -> Self {
        self.detector_version_id = Some(detector_version_id.into());
        self
    }

    /// Add an event attribute; fails if `name` is already present
    pub fn add_event_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        insert_unique(&mut self.event_attributes, "eventAttributes", name, value.into())?;
        Ok(self)
    }

    /// Attach a raw payload for an external endpoint; fails if the endpoint
    /// already has one
    pub fn add_endpoint_data_blob(
        mut self,
        endpoint: impl Into<String>,
        blob: ModelEndpointDataBlob,
    ) -> Result<Self, ValidationError> {
        insert_unique(
            &mut self.external_model_endpoint_data_blobs,
            "externalModelEndpointDataBlobs",
            endpoint,
            blob,
        )?;
        Ok(self)
    }

    pub fn event_attributes(&self) -> &BTreeMap<String, String> {
        &self.event_attributes
    }

    pub fn external_model_endpoint_data_blobs(&self) -> &BTreeMap<String, ModelEndpointDataBlob> {
        &self.external_model_endpoint_data_blobs
    }
}

impl Validate for GetPredictionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_optional(self.detector_version_id.as_deref(), |v| {
            check_pattern("detectorVersionId", v, Pattern::VersionId)
        })?;
        check_identifier("eventId", &self.event_id)?;
        for name in self.event_attributes.keys() {
            check_text("eventAttributes.key", name, 1, 64)?;
        }
        for (endpoint, blob) in &self.external_model_endpoint_data_blobs {
            check_pattern("externalModelEndpointDataBlobs.key", endpoint, Pattern::ModelEndpoint)?;
            blob.validate()?;
        }
        Ok(())
    }
}

/// Outcomes, model scores and rule results for one evaluated event
///
/// Read-only once received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPredictionResult {
    #[serde(default)]
    outcomes: Vec<String>,

    #[serde(default)]
    model_scores: Vec<ModelScores>,

    #[serde(default)]
    rule_results: Vec<RuleResult>,
}

impl GetPredictionResult {
    pub fn new(
        outcomes: Vec<String>,
        model_scores: Vec<ModelScores>,
        rule_results: Vec<RuleResult>,
    ) -> Self {
        Self {
            outcomes,
            model_scores,
            rule_results,
        }
    }

    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    pub fn model_scores(&self) -> &[ModelScores] {
        &self.model_scores
    }

    pub fn rule_results(&self) -> &[RuleResult] {
        &self.rule_results
    }

    pub fn has_outcome(&self, outcome: &str) -> bool {
        self.outcomes.iter().any(|o| o == outcome)
    }

    /// Outcomes produced by `rule_id`, if that rule matched
    pub fn outcomes_for_rule(&self, rule_id: &str) -> Option<&[String]> {
        self.rule_results
            .iter()
            .find(|r| r.rule_id.as_deref() == Some(rule_id))
            .map(|r| r.outcomes.as_slice())
    }

    /// Score for `label` from the first model that reports one
    pub fn score(&self, label: &str) -> Option<f32> {
        self.model_scores.iter().find_map(|s| s.score(label))
    }
}

operation!(GetPredictionRequest => GetPredictionResult, "GetPrediction");
