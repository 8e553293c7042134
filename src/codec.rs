//! Codec profiles: named bundles of JSON serialization options

use crate::error::Result;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Serialization options passed to every write
///
/// Profiles only affect how values are written. Reading is plain serde
/// deserialization regardless of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodecProfile {
    /// Single-line output, `null` object members omitted
    #[default]
    Compact,
    /// Indented output, `null` object members omitted
    Pretty,
    /// Single-line output, `null` object members kept
    SerializeNulls,
    /// Indented output, `null` object members kept
    PrettySerializeNulls,
}

impl CodecProfile {
    /// Whether output is indented
    #[must_use]
    pub fn is_pretty(self) -> bool {
        matches!(self, CodecProfile::Pretty | CodecProfile::PrettySerializeNulls)
    }

    /// Whether `null` object members survive serialization
    #[must_use]
    pub fn serializes_nulls(self) -> bool {
        matches!(
            self,
            CodecProfile::SerializeNulls | CodecProfile::PrettySerializeNulls
        )
    }

    /// Same null handling, with pretty printing switched on or off
    #[must_use]
    pub fn with_pretty(self, pretty: bool) -> Self {
        match (pretty, self.serializes_nulls()) {
            (true, true) => CodecProfile::PrettySerializeNulls,
            (true, false) => CodecProfile::Pretty,
            (false, true) => CodecProfile::SerializeNulls,
            (false, false) => CodecProfile::Compact,
        }
    }

    /// Serialize data into a value tree
    pub fn to_value<T: Serialize + ?Sized>(self, data: &T) -> Result<Value> {
        let mut value = serde_json::to_value(data)?;
        if !self.serializes_nulls() {
            strip_null_members(&mut value);
        }
        Ok(value)
    }

    /// Serialize data to text
    pub fn to_string<T: Serialize + ?Sized>(self, data: &T) -> Result<String> {
        let value = self.to_value(data)?;
        let text = if self.is_pretty() {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Deserialize a value tree into `T`
    pub fn from_value<T: DeserializeOwned>(self, value: Value) -> Result<T> {
        Ok(serde_json::from_value(value)?)
    }

    /// Deserialize text into `T`
    pub fn deserialize_str<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Drop `null` members from every object in the tree. Array slots stay.
fn strip_null_members(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_null_members(v);
            }
        }
        Value::Array(items) => {
            for v in items {
                strip_null_members(v);
            }
        }
        _ => {}
    }
}

// =============================================================================
// Tests
// =============================================================================
