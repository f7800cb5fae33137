//! Detector records

use crate::types::DetectorVersionStatus;
use serde::{Deserialize, Serialize};

/// A detector: a named container for versions of a rule set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detector {
    pub detector_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl Detector {
    pub fn new(detector_id: impl Into<String>) -> Self {
        Self {
            detector_id: detector_id.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Summary of one version of a detector, as listed by `DescribeDetector`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorVersionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_version_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DetectorVersionStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,
}

impl DetectorVersionSummary {
    /// Whether this version can still be edited in place
    pub fn is_draft(&self) -> bool {
        self.status.is_some_and(DetectorVersionStatus::is_mutable)
    }
}
