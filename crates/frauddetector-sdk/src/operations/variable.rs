//! Variable operations

use crate::operation::{check_max_results, non_empty_token};
use frauddetector_core::model::{
    BatchCreateVariableError, BatchGetVariableError, Variable, VariableEntry,
};
use frauddetector_core::types::{DataSource, DataType};
use frauddetector_core::validation::{
    check_description, check_identifier, check_length, check_optional, Validate,
};
use frauddetector_core::ValidationError;
use serde::{Deserialize, Serialize};

/// Page size bounds for `GetVariables`
pub const GET_VARIABLES_MAX_RESULTS: (i32, i32) = (50, 100);
/// Entry count bounds for `BatchCreateVariable`
pub const BATCH_CREATE_VARIABLE_ENTRIES: (usize, usize) = (1, 25);
/// Name count bounds for `BatchGetVariable`
pub const BATCH_GET_VARIABLE_NAMES: (usize, usize) = (1, 100);

// =============================================================================
// CreateVariable
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariableRequest {
    pub name: String,
    pub data_type: DataType,
    pub data_source: DataSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
}

impl CreateVariableRequest {
    pub fn new(name: impl Into<String>, data_type: DataType, data_source: DataSource) -> Self {
        Self {
            name: name.into(),
            data_type,
            data_source,
            default_value: None,
            description: None,
            variable_type: None,
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

impl Validate for CreateVariableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("name", &self.name)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateVariableResult {}

operation!(CreateVariableRequest => CreateVariableResult, "CreateVariable");

// =============================================================================
// BatchCreateVariable
// =============================================================================

/// Create up to 25 variables at once
///
/// Entries carry their enum fields as plain strings; each is checked
/// against its vocabulary before sending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreateVariableRequest {
    pub variable_entries: Vec<VariableEntry>,
}

impl BatchCreateVariableRequest {
    pub fn new(variable_entries: Vec<VariableEntry>) -> Self {
        Self { variable_entries }
    }

    pub fn add_entry(mut self, entry: VariableEntry) -> Self {
        self.variable_entries.push(entry);
        self
    }
}

impl Validate for BatchCreateVariableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = BATCH_CREATE_VARIABLE_ENTRIES;
        check_length("variableEntries", self.variable_entries.len(), min, max)?;
        self.variable_entries.validate()
    }
}

/// Entries the service refused; an empty list means every entry was created
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCreateVariableResult {
    #[serde(default)]
    pub errors: Vec<BatchCreateVariableError>,
}

impl BatchCreateVariableResult {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

operation!(BatchCreateVariableRequest => BatchCreateVariableResult, "BatchCreateVariable");

// =============================================================================
// BatchGetVariable
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetVariableRequest {
    pub names: Vec<String>,
}

impl BatchGetVariableRequest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for BatchGetVariableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let (min, max) = BATCH_GET_VARIABLE_NAMES;
        check_length("names", self.names.len(), min, max)?;
        self.names
            .iter()
            .try_for_each(|name| check_identifier("names", name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetVariableResult {
    #[serde(default)]
    pub variables: Vec<Variable>,

    #[serde(default)]
    pub errors: Vec<BatchGetVariableError>,
}

operation!(BatchGetVariableRequest => BatchGetVariableResult, "BatchGetVariable");

// =============================================================================
// GetVariables
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVariablesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetVariablesRequest {
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

impl Validate for GetVariablesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_optional(self.name.as_deref(), |name| check_identifier("name", name))?;
        check_max_results(self.max_results, GET_VARIABLES_MAX_RESULTS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVariablesResult {
    #[serde(default)]
    pub variables: Vec<Variable>,

    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_token: Option<String>,
}

operation!(GetVariablesRequest => GetVariablesResult, "GetVariables");
paginated!(GetVariablesRequest => GetVariablesResult, Variable, variables);

// =============================================================================
// UpdateVariable
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariableRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
}

impl UpdateVariableRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            description: None,
            variable_type: None,
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

impl Validate for UpdateVariableRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_identifier("name", &self.name)?;
        check_optional(self.description.as_deref(), |d| check_description("description", d))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateVariableResult {}

operation!(UpdateVariableRequest => UpdateVariableResult, "UpdateVariable");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str) -> VariableEntry {
        VariableEntry::new(name, DataType::Float, DataSource::Event).with_default_value("0.0")
    }

    #[test]
    fn test_batch_create_entry_bounds() {
        assert_eq!(
            BatchCreateVariableRequest::default().validate().unwrap_err(),
            ValidationError::InvalidLength {
                field: "variableEntries".to_string(),
                length: 0,
                min: 1,
                max: 25,
            }
        );

        let full: Vec<_> = (0..25).map(|i| entry(&format!("var_{i}"))).collect();
        assert!(BatchCreateVariableRequest::new(full.clone()).validate().is_ok());

        let over = BatchCreateVariableRequest::new(full).add_entry(entry("var_25"));
        assert!(matches!(
            over.validate(),
            Err(ValidationError::InvalidLength { length: 26, .. })
        ));
    }

    #[test]
    fn test_batch_create_checks_entry_literals() {
        let mut bad = entry("amount");
        bad.data_type = Some("DECIMAL".to_string());
        let err = BatchCreateVariableRequest::new(vec![bad]).validate().unwrap_err();
        assert_eq!(err.field(), "dataType");
    }

    #[test]
    fn test_batch_get_name_bounds() {
        assert!(BatchGetVariableRequest::new(["email", "ip_address"]).validate().is_ok());
        assert!(BatchGetVariableRequest::new(Vec::<String>::new()).validate().is_err());

        let names: Vec<String> = (0..101).map(|i| format!("v{i}")).collect();
        assert!(matches!(
            BatchGetVariableRequest::new(names).validate(),
            Err(ValidationError::InvalidLength { length: 101, max: 100, .. })
        ));
    }

    #[test]
    fn test_create_variable_wire_shape() {
        let request = CreateVariableRequest::new("email_address", DataType::String, DataSource::Event)
            .with_default_value("<unknown>")
            .with_variable_type("EMAIL_ADDRESS");
        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "email_address",
                "dataType": "STRING",
                "dataSource": "EVENT",
                "defaultValue": "<unknown>",
                "variableType": "EMAIL_ADDRESS",
            })
        );
    }

    #[test]
    fn test_create_variable_default_value_optional() {
        let request: CreateVariableRequest = serde_json::from_value(json!({
            "name": "amount",
            "dataType": "FLOAT",
            "dataSource": "EVENT"
        }))
        .unwrap();
        assert_eq!(request.default_value, None);
        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "amount", "dataType": "FLOAT", "dataSource": "EVENT"})
        );
    }

    #[test]
    fn test_batch_results_default_to_empty() {
        let result: BatchCreateVariableResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.is_complete());

        let result: BatchGetVariableResult = serde_json::from_value(json!({
            "errors": [{"name": "missing", "code": 404, "message": "not found"}]
        }))
        .unwrap();
        assert!(result.variables.is_empty());
        assert_eq!(result.errors[0].code, Some(404));
    }
}
