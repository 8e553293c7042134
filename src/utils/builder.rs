//! Fluent construction of JSON objects

use crate::codec::CodecProfile;
use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Builds a JSON object one member at a time
///
/// Members keep the order in which they were first mapped.
///
/// # Example
///
/// ```rust
/// use jfig::JsonBuilder;
///
/// let text = JsonBuilder::new()
///     .map("name", "gdrive")
///     .map_if(false, "debug", true)
///     .map_if_not_null("token", None::<String>)
///     .build();
///
/// assert_eq!(text, r#"{"name":"gdrive"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBuilder {
    json_map: Map<String, Value>,
}

impl JsonBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a member, replacing any previous value
    #[must_use]
    pub fn map(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.json_map.insert(key.into(), value.into());
        self
    }

    /// Set a member from any serializable value
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn map_serialized<T: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        self.json_map
            .insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Set a member only when `expression` holds
    #[must_use]
    pub fn map_if(self, expression: bool, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if expression {
            self.map(key, value)
        } else {
            self
        }
    }

    /// Set a member only when `predicate` accepts the value
    #[must_use]
    pub fn map_if_with<T, P>(self, predicate: P, key: impl Into<String>, value: T) -> Self
    where
        T: Into<Value>,
        P: FnOnce(&T) -> bool,
    {
        let keep = predicate(&value);
        self.map_if(keep, key, value)
    }

    /// Set a member only when a value is present
    #[must_use]
    pub fn map_if_not_null<T: Into<Value>>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(v) => self.map(key, v),
            None => self,
        }
    }

    /// Set a member only when the key is not mapped yet
    #[must_use]
    pub fn map_if_absent(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let absent = !self.json_map.contains_key(&key);
        self.map_if(absent, key, value)
    }

    /// Remove a member
    #[must_use]
    pub fn remove_key(mut self, key: &str) -> Self {
        self.json_map.remove(key);
        self
    }

    /// Members mapped so far
    pub fn json_map(&self) -> &Map<String, Value> {
        &self.json_map
    }

    /// Compact JSON text
    #[must_use]
    pub fn build(&self) -> String {
        Value::Object(self.json_map.clone()).to_string()
    }

    /// Indented JSON text
    #[must_use]
    pub fn build_pretty(&self) -> String {
        format!("{:#}", Value::Object(self.json_map.clone()))
    }

    /// JSON text written with a specific profile
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn build_with(&self, profile: CodecProfile) -> Result<String> {
        profile.to_string(&self.json_map)
    }

    /// The built object
    #[must_use]
    pub fn build_object(self) -> Map<String, Value> {
        self.json_map
    }

    /// The built object as a value tree
    #[must_use]
    pub fn build_value(self) -> Value {
        Value::Object(self.json_map)
    }
}

impl From<Map<String, Value>> for JsonBuilder {
    fn from(json_map: Map<String, Value>) -> Self {
        Self { json_map }
    }
}
