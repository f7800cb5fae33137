//! Outcome operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::Outcome;
use frauddetector_core::validation::{
    check_description, check_identifier, check_optional, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `GetOutcomes`
pub const GET_OUTCOMES_MAX_RESULTS: (i32, i32) = (50, 100);

/// Create or update an outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutOutcomeRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PutOutcomeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Validate for PutOutcomeRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("name", &self.name)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutOutcomeResult {}

operation!(PutOutcomeRequest => PutOutcomeResult, "PutOutcome");

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOutcomesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetOutcomesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for GetOutcomesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.name.as_deref(), |name| check_identifier("name", name))?;
        check_max_results(self.max_results, GET_OUTCOMES_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOutcomesResult {
    #[serde(default)]
    pub outcomes: Vec<Outcome>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetOutcomesRequest => GetOutcomesResult, "GetOutcomes");
paginated!(GetOutcomesRequest => GetOutcomesResult, Outcome, outcomes);
