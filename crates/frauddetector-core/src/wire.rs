//! JSON wire conversion

use crate::error::Result;
use crate::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Validate `value` and render it as a JSON object body
pub fn to_wire<T>(value: &T) -> Result<Value>
where
    T: Serialize + Validate,
{
    value.validate()?;
    Ok(serde_json::to_value(value)?)
}

/// Read a JSON body into `T`. An empty or `null` body reads as `{}`.
pub fn from_wire<T>(body: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = match body {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(body)?)
}
