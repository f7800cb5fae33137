//! Rule operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::{Rule, RuleDetail};
use frauddetector_core::types::Language;
use frauddetector_core::validation::{
    check_description, check_expression, check_identifier, check_length, check_optional,
    check_pattern, reject, Pattern, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `GetRules`
pub const GET_RULES_MAX_RESULTS: (i32, i32) = (50, 100);

fn check_outcomes(outcomes: &[String]) -> Result<(), ValidationError> {
    check_length("outcomes", outcomes.len(), 1, usize::MAX)?;
    outcomes
        .iter()
        .try_for_each(|name| check_identifier("outcomes", name))
}

/// Result of operations that create a new rule version
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleVersionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

// =============================================================================
// CreateRule
// =============================================================================

/// Create version 1 of a rule in a detector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub rule_id: String,
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub expression: String,
    pub language: Language,
    pub outcomes: Vec<String>,
}

impl CreateRuleRequest {
    pub fn new(
        rule_id: impl Into<String>,
        detector_id: impl Into<String>,
        expression: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            detector_id: detector_id.into(),
            description: None,
            expression: expression.into(),
            language,
            outcomes: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcomes.push(outcome.into());
        self
    }
}

impl Validate for CreateRuleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("ruleId", &self.rule_id)?;
        check_identifier("detectorId", &self.detector_id)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        check_expression("expression", &self.expression)?;
        check_outcomes(&self.outcomes)
    }
}

pub type CreateRuleResult = RuleVersionResult;

operation!(CreateRuleRequest => CreateRuleResult, "CreateRule");

// =============================================================================
// GetRules
// =============================================================================

/// List rules of a detector, optionally narrowed to one rule or rule version
///
/// `rule_version` is only meaningful together with `rule_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRulesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetRulesRequest {
    pub fn new(detector_id: impl Into<String>) -> Self {
        Self {
            rule_id: None,
            detector_id: detector_id.into(),
            rule_version: None,
            next_token: None,
            max_results: None,
        }
    }

    pub fn with_rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    pub fn with_rule_version(mut self, rule_version: impl Into<String>) -> Self {
        self.rule_version = Some(rule_version.into());
        self
    }

    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl Validate for GetRulesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.rule_id.as_deref(), |id| check_identifier("ruleId", id))?;
        check_identifier("detectorId", &self.detector_id)?;
        check_optional(self.rule_version.as_deref(), |v| {
            check_pattern("ruleVersion", v, Pattern::VersionId)
        })?;
        if self.rule_version.is_some() && self.rule_id.is_none() {
            return reject(ValidationError::MissingField {
                field: "ruleId".to_string(),
            });
        }
        check_max_results(self.max_results, GET_RULES_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRulesResult {
    #[serde(default)]
    pub rule_details: Vec<RuleDetail>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetRulesRequest => GetRulesResult, "GetRules");
paginated!(GetRulesRequest => GetRulesResult, RuleDetail, rule_details);

// =============================================================================
// UpdateRuleMetadata
// =============================================================================

/// Change a rule version's description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleMetadataRequest {
    pub rule: Rule,
    pub description: String,
}

impl UpdateRuleMetadataRequest {
    pub fn new(rule: Rule, description: impl Into<String>) -> Self {
        Self {
            rule,
            description: description.into(),
        }
    }
}

impl Validate for UpdateRuleMetadataRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        self.rule.validate()?;
        check_description("description", &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateRuleMetadataResult {}

operation!(UpdateRuleMetadataRequest => UpdateRuleMetadataResult, "UpdateRuleMetadata");

// =============================================================================
// UpdateRuleVersion
// =============================================================================

/// Create a new version of an existing rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleVersionRequest {
    pub rule: Rule,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub expression: String,
    pub language: Language,
    pub outcomes: Vec<String>,
}

impl UpdateRuleVersionRequest {
    pub fn new(rule: Rule, expression: impl Into<String>, language: Language) -> Self {
        Self {
            rule,
            description: None,
            expression: expression.into(),
            language,
            outcomes: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcomes.push(outcome.into());
        self
    }
}

impl Validate for UpdateRuleVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        self.rule.validate()?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))?;
        check_expression("expression", &self.expression)?;
        check_outcomes(&self.outcomes)
    }
}

pub type UpdateRuleVersionResult = RuleVersionResult;

operation!(UpdateRuleVersionRequest => UpdateRuleVersionResult, "UpdateRuleVersion");

// =============================================================================
// DeleteRuleVersion
// =============================================================================

/// Delete a rule version not used by any `ACTIVE` or `INACTIVE` detector version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRuleVersionRequest {
    pub detector_id: String,
    pub rule_id: String,
    pub rule_version: String,
}

impl DeleteRuleVersionRequest {
    pub fn new(
        detector_id: impl Into<String>,
        rule_id: impl Into<String>,
        rule_version: impl Into<String>,
    ) -> Self {
        Self {
            detector_id: detector_id.into(),
            rule_id: rule_id.into(),
            rule_version: rule_version.into(),
        }
    }
}

impl From<Rule> for DeleteRuleVersionRequest {
    fn from(rule: Rule) -> Self {
        Self {
            detector_id: rule.detector_id,
            rule_id: rule.rule_id,
            rule_version: rule.rule_version,
        }
    }
}

impl Validate for DeleteRuleVersionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_identifier("ruleId", &self.rule_id)?;
        check_pattern("ruleVersion", &self.rule_version, Pattern::VersionId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteRuleVersionResult {}

operation!(DeleteRuleVersionRequest => DeleteRuleVersionResult, "DeleteRuleVersion");
