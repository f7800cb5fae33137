//! Variable records

use crate::error::ValidationError;
use crate::types::{DataSource, DataType};
use crate::validation::{
    check_description, check_identifier, check_optional, parse_enum, require, Validate,
};
use serde::{Deserialize, Serialize};

/// A named, typed value slot used by rules and models
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form tag, e.g. `EMAIL_ADDRESS` or `IP_ADDRESS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// A variable definition inside a `BatchCreateVariable` request
///
/// The batch API takes every field as a plain string, so the enum-valued
/// fields are only checked against their vocabularies during validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
}

impl VariableEntry {
    pub fn new(name: impl Into<String>, data_type: DataType, data_source: DataSource) -> Self {
        Self {
            name: Some(name.into()),
            data_type: Some(data_type.to_string()),
            data_source: Some(data_source.to_string()),
            ..Self::default()
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variable_type(mut self, variable_type: impl Into<String>) -> Self {
        self.variable_type = Some(variable_type.into());
        self
    }
}

impl Validate for VariableEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("name", require("name", self.name.as_ref())?)?;
        parse_enum::<DataType>("dataType", require("dataType", self.data_type.as_ref())?)?;
        parse_enum::<DataSource>("dataSource", require("dataSource", self.data_source.as_ref())?)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

/// Per-variable failure reported by `BatchCreateVariable`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreateVariableError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-name failure reported by `BatchGetVariable`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetVariableError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
