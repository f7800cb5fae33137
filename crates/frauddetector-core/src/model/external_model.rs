//! Externally hosted scoring endpoints

use crate::error::ValidationError;
use crate::map::insert_unique;
use crate::types::{ModelEndpointStatus, ModelInputDataFormat, ModelOutputDataFormat, ModelSource};
use crate::validation::{
    check_identifier, check_length, check_pattern, check_text, reject, Pattern, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IAM role the service assumes to invoke an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub arn: String,
    pub name: String,
}

impl Role {
    pub fn new(arn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            name: name.into(),
        }
    }
}

impl Validate for Role {
    fn validate(&self) -> Result<(), ValidationError> {
        check_pattern("role.arn", &self.arn, Pattern::RoleArn)?;
        check_text("role.name", &self.name, 1, 64)
    }
}

/// How the service builds the request body sent to an external endpoint
///
/// A non-opaque configuration carries exactly one template, the one that
/// matches its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInputConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ModelInputDataFormat>,

    /// Pass the event through unchanged instead of rendering a template
    #[serde(default)]
    pub is_opaque: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_input_template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_input_template: Option<String>,
}

impl ModelInputConfiguration {
    /// Opaque passthrough of the event payload
    pub fn opaque() -> Self {
        Self {
            is_opaque: true,
            ..Self::default()
        }
    }

    /// JSON body rendered from a template such as `{"amount": "{{amount}}"}`
    pub fn json(template: impl Into<String>) -> Self {
        Self {
            format: Some(ModelInputDataFormat::ApplicationJson),
            json_input_template: Some(template.into()),
            ..Self::default()
        }
    }

    /// CSV body rendered from a template such as `{{amount}},{{currency}}`
    pub fn csv(template: impl Into<String>) -> Self {
        Self {
            format: Some(ModelInputDataFormat::TextCsv),
            csv_input_template: Some(template.into()),
            ..Self::default()
        }
    }
}

fn unexpected(field: &str, reason: &str) -> ValidationError {
    ValidationError::UnexpectedField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

impl Validate for ModelInputConfiguration {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_opaque {
            if self.json_input_template.is_some() {
                return reject(unexpected("jsonInputTemplate", "opaque input takes no template"));
            }
            if self.csv_input_template.is_some() {
                return reject(unexpected("csvInputTemplate", "opaque input takes no template"));
            }
            return Ok(());
        }

        let (wanted, wanted_name, other, other_name) = match self.format {
            Some(ModelInputDataFormat::ApplicationJson) => (
                &self.json_input_template,
                "jsonInputTemplate",
                &self.csv_input_template,
                "csvInputTemplate",
            ),
            Some(ModelInputDataFormat::TextCsv) => (
                &self.csv_input_template,
                "csvInputTemplate",
                &self.json_input_template,
                "jsonInputTemplate",
            ),
            None => {
                return reject(ValidationError::MissingField {
                    field: "inputConfiguration.format".to_string(),
                })
            }
        };

        if other.is_some() {
            return reject(unexpected(other_name, "template does not match the input format"));
        }
        match wanted {
            Some(template) => check_text(wanted_name, template, 1, 2048),
            None => reject(ValidationError::MissingField {
                field: wanted_name.to_string(),
            }),
        }
    }
}

/// How the service reads scores out of an external endpoint's response
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelOutputConfiguration {
    pub format: ModelOutputDataFormat,

    /// JSON key in the response → variable name
    #[serde(
        default,
        deserialize_with = "crate::map::deserialize_unique",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub json_key_to_variable_map: BTreeMap<String, String>,

    /// CSV column index (as a string) → variable name
    #[serde(
        default,
        deserialize_with = "crate::map::deserialize_unique",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub csv_index_to_variable_map: BTreeMap<String, String>,
}

impl ModelOutputConfiguration {
    pub fn new(format: ModelOutputDataFormat) -> Self {
        Self {
            format,
            json_key_to_variable_map: BTreeMap::new(),
            csv_index_to_variable_map: BTreeMap::new(),
        }
    }

    pub fn map_json_key(
        mut self,
        key: impl Into<String>,
        variable: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        insert_unique(
            &mut self.json_key_to_variable_map,
            "jsonKeyToVariableMap",
            key,
            variable.into(),
        )?;
        Ok(self)
    }

    pub fn map_csv_index(mut self, index: u32, variable: impl Into<String>) -> Result<Self, ValidationError> {
        insert_unique(
            &mut self.csv_index_to_variable_map,
            "csvIndexToVariableMap",
            index.to_string(),
            variable.into(),
        )?;
        Ok(self)
    }
}

impl Validate for ModelOutputConfiguration {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.format {
            ModelOutputDataFormat::ApplicationJsonlines => {
                check_length("jsonKeyToVariableMap", self.json_key_to_variable_map.len(), 1, usize::MAX)?;
                if !self.csv_index_to_variable_map.is_empty() {
                    return reject(unexpected(
                        "csvIndexToVariableMap",
                        "mapping does not match the output format",
                    ));
                }
                for variable in self.json_key_to_variable_map.values() {
                    check_identifier("jsonKeyToVariableMap.value", variable)?;
                }
            }
            ModelOutputDataFormat::TextCsv => {
                check_length("csvIndexToVariableMap", self.csv_index_to_variable_map.len(), 1, usize::MAX)?;
                if !self.json_key_to_variable_map.is_empty() {
                    return reject(unexpected(
                        "jsonKeyToVariableMap",
                        "mapping does not match the output format",
                    ));
                }
                for (index, variable) in &self.csv_index_to_variable_map {
                    check_pattern("csvIndexToVariableMap.key", index, Pattern::CsvIndex)?;
                    check_identifier("csvIndexToVariableMap.value", variable)?;
                }
            }
        }
        Ok(())
    }
}

/// Raw payload forwarded to an external endpoint during prediction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEndpointDataBlob {
    #[serde(with = "crate::encoding::base64_bytes")]
    pub byte_buffer: Vec<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl ModelEndpointDataBlob {
    pub fn new(byte_buffer: impl Into<Vec<u8>>) -> Self {
        Self {
            byte_buffer: byte_buffer.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl Validate for ModelEndpointDataBlob {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.content_type {
            Some(content_type) => check_text("contentType", content_type, 1, 1024),
            None => Ok(()),
        }
    }
}

/// An externally hosted scoring endpoint, as returned by `GetExternalModels`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_source: Option<ModelSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_configuration: Option<ModelInputConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_configuration: Option<ModelOutputConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_endpoint_status: Option<ModelEndpointStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl ExternalModel {
    pub fn is_associated(&self) -> bool {
        self.model_endpoint_status == Some(ModelEndpointStatus::Associated)
    }
}
