//! Pieces of a prediction response

use super::scoring_model::ModelVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores produced by one model version, keyed by label
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<ModelVersion>,

    #[serde(default, deserialize_with = "crate::map::deserialize_unique")]
    pub scores: BTreeMap<String, f32>,
}

impl ModelScores {
    pub fn score(&self, label: &str) -> Option<f32> {
        self.scores.get(label).copied()
    }
}

/// Outcomes produced by one matched rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(default)]
    pub outcomes: Vec<String>,
}
