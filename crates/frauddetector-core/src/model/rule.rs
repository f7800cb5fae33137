//! Rule records

use crate::error::ValidationError;
use crate::types::Language;
use crate::validation::{check_identifier, check_pattern, Pattern, Validate};
use serde::{Deserialize, Serialize};

/// Reference to one version of a rule within a detector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub detector_id: String,
    pub rule_id: String,
    pub rule_version: String,
}

impl Rule {
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

impl Validate for Rule {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("detectorId", &self.detector_id)?;
        check_identifier("ruleId", &self.rule_id)?;
        check_pattern("ruleVersion", &self.rule_version, Pattern::VersionId)
    }
}

/// Full description of a rule version, as returned by `GetRules`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Outcome names, referenced by name rather than by object
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl RuleDetail {
    /// The `(detectorId, ruleId, ruleVersion)` reference, if all three are present
    pub fn rule(&self) -> Option<Rule> {
        Some(Rule::new(
            self.detector_id.clone()?,
            self.rule_id.clone()?,
            self.rule_version.clone()?,
        ))
    }
}
