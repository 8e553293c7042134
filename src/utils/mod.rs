//! Text ↔ value tree helpers and the [`JsonBuilder`]

mod builder;

pub use builder::JsonBuilder;

use crate::error::{Error, Result, type_name};
use serde_json::{Map, Value};

/// Parse JSON text into a value tree
pub fn parse_value(json: &str) -> Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Parse JSON text whose root must be an object
pub fn parse_object(json: &str) -> Result<Map<String, Value>> {
    into_object(parse_value(json)?, "<root>")
}

/// Re-indent JSON text
pub fn set_pretty(json: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&parse_value(json)?)?)
}

/// Parse JSON text into an ordered map
pub fn to_map(json: &str) -> Result<Map<String, Value>> {
    parse_object(json)
}

/// Parse JSON text whose root must be an array
pub fn to_list(json: &str) -> Result<Vec<Value>> {
    into_list(parse_value(json)?, "<root>")
}

pub(crate) fn into_object(value: Value, origin: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::TypeMismatch {
            key: origin.to_string(),
            expected: "object".into(),
            actual: type_name(&other).into(),
        }),
    }
}

pub(crate) fn into_list(value: Value, origin: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::TypeMismatch {
            key: origin.to_string(),
            expected: "array".into(),
            actual: type_name(&other).into(),
        }),
    }
}
