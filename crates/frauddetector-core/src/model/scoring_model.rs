//! Trained scoring models and their versions

use crate::error::ValidationError;
use crate::map::insert_unique;
use crate::types::{ModelTypeEnum, ModelVersionStatus};
use crate::validation::{
    check_identifier, check_length, check_pattern, check_text, reject, Pattern, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where training data lives and which role may read it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDataSource {
    /// `s3://` location of the training data
    pub data_location: String,
    /// IAM role ARN the service assumes to read `data_location`
    pub data_access_role_arn: String,
}

impl TrainingDataSource {
    pub fn new(data_location: impl Into<String>, data_access_role_arn: impl Into<String>) -> Self {
        Self {
            data_location: data_location.into(),
            data_access_role_arn: data_access_role_arn.into(),
        }
    }
}

impl Validate for TrainingDataSource {
    fn validate(&self) -> Result<(), ValidationError> {
        check_pattern("dataLocation", &self.data_location, Pattern::S3Location)?;
        check_pattern("dataAccessRoleArn", &self.data_access_role_arn, Pattern::RoleArn)
    }
}

/// A variable consumed by a model, with its column index in the training data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariable {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

impl ModelVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    pub fn with_index(mut self, index: i32) -> Self {
        self.index = Some(index);
        self
    }
}

impl Validate for ModelVariable {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelVariables.name", &self.name)?;
        match self.index {
            Some(index) if index < 0 => reject(ValidationError::InvalidRange {
                field: "modelVariables.index".to_string(),
                value: i64::from(index),
                min: 0,
                max: i64::from(i32::MAX),
            }),
            _ => Ok(()),
        }
    }
}

/// Maps canonical labels to the label values found in the training data
///
/// Each canonical label owns a non-empty list of source labels, e.g.
/// `FRAUD -> ["fraud", "chargeback"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSchema {
    /// Name of the label column in the training data
    pub label_key: String,

    #[serde(default, deserialize_with = "crate::map::deserialize_unique")]
    pub label_mapper: BTreeMap<String, Vec<String>>,
}

impl LabelSchema {
    pub fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            label_mapper: BTreeMap::new(),
        }
    }

    /// Add a canonical label; a label may only be mapped once
    pub fn add_label_mapping<I, S>(
        mut self,
        canonical: impl Into<String>,
        sources: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        insert_unique(&mut self.label_mapper, "labelMapper", canonical, sources)?;
        Ok(self)
    }
}

impl Validate for LabelSchema {
    fn validate(&self) -> Result<(), ValidationError> {
        check_text("labelKey", &self.label_key, 1, 64)?;
        check_length("labelMapper", self.label_mapper.len(), 1, usize::MAX)?;
        for (canonical, sources) in &self.label_mapper {
            check_text("labelMapper.key", canonical, 1, 64)?;
            check_length(&format!("labelMapper.{canonical}"), sources.len(), 1, usize::MAX)?;
        }
        Ok(())
    }
}

/// A model definition, as returned by `GetModels`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelTypeEnum>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_source: Option<TrainingDataSource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_variables: Vec<ModelVariable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_schema: Option<LabelSchema>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// Reference to one version of a model
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    pub model_id: String,
    pub model_type: ModelTypeEnum,
    /// Version number such as `1.0`
    pub model_version_number: String,
}

impl ModelVersion {
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

impl Validate for ModelVersion {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("modelId", &self.model_id)?;
        check_pattern(
            "modelVersionNumber",
            &self.model_version_number,
            Pattern::ModelVersionNumber,
        )
    }
}

/// Full description of a model version, as returned by `DescribeModelVersions`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersionDetail {
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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_source: Option<TrainingDataSource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_variables: Vec<ModelVariable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_schema: Option<LabelSchema>,

    #[serde(
        default,
        deserialize_with = "crate::map::deserialize_unique",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub validation_metrics: BTreeMap<String, String>,

    #[serde(
        default,
        deserialize_with = "crate::map::deserialize_unique",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub training_metrics: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl ModelVersionDetail {
    /// The `(modelId, modelType, modelVersionNumber)` reference, if complete
    pub fn model_version(&self) -> Option<ModelVersion> {
        Some(ModelVersion::new(
            self.model_id.clone()?,
            self.model_type?,
            self.model_version_number.clone()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraud_labels() -> LabelSchema {
        LabelSchema::new("is_fraud")
            .add_label_mapping("FRAUD", ["1", "chargeback"])
            .unwrap()
            .add_label_mapping("LEGIT", ["0"])
            .unwrap()
    }

    #[test]
    fn test_label_schema_rejects_duplicate_label() {
        let err = fraud_labels()
            .add_label_mapping("FRAUD", ["fraud"])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateKey {
                field: "labelMapper".to_string(),
                key: "FRAUD".to_string(),
            }
        );
    }

    #[test]
    fn test_label_schema_requires_source_labels() {
        assert!(fraud_labels().validate().is_ok());

        let empty = LabelSchema::new("is_fraud")
            .add_label_mapping("FRAUD", Vec::<String>::new())
            .unwrap();
        assert!(matches!(
            empty.validate(),
            Err(ValidationError::InvalidLength { length: 0, .. })
        ));

        assert!(LabelSchema::new("is_fraud").validate().is_err());
    }

    #[test]
    fn test_label_schema_wire_shape() {
        let json = serde_json::to_value(fraud_labels()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "labelKey": "is_fraud",
                "labelMapper": {"FRAUD": ["1", "chargeback"], "LEGIT": ["0"]}
            })
        );
    }

    #[test]
    fn test_training_data_source_validation() {
        let source = TrainingDataSource::new(
            "s3://fraud-training/events.csv",
            "arn:aws:iam::123456789012:role/FraudDetectorTraining",
        );
        assert!(source.validate().is_ok());

        let bad = TrainingDataSource::new("/tmp/events.csv", source.data_access_role_arn.clone());
        assert_eq!(bad.validate().unwrap_err().field(), "dataLocation");
    }

    #[test]
    fn test_model_version_validation() {
        let version = ModelVersion::new("onlinefraud", ModelTypeEnum::OnlineFraudInsights, "1.0");
        assert!(version.validate().is_ok());

        let version = ModelVersion::new("onlinefraud", ModelTypeEnum::OnlineFraudInsights, "1");
        assert_eq!(version.validate().unwrap_err().field(), "modelVersionNumber");
    }

    #[test]
    fn test_model_variable_index() {
        assert!(ModelVariable::new("amount").with_index(0).validate().is_ok());
        assert!(ModelVariable::new("amount").with_index(-1).validate().is_err());
    }
}
