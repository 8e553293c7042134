//! Typed getters over a JSON object

use crate::error::{Error, Result, type_name};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Typed read access to the members of a JSON object
///
/// Implementors only expose their object; every getter is provided. Getters
/// fail with [`Error::KeyNotFound`] when the member is absent and with
/// [`Error::TypeMismatch`] when it cannot be converted. Numeric strings are
/// accepted by the numeric getters, and numbers or booleans by
/// [`JsonAccess::get_string`].
pub trait JsonAccess {
    /// The object being read
    fn content(&self) -> &Map<String, Value>;

    /// Whether `key` is present
    fn contains(&self, key: &str) -> bool {
        self.content().contains_key(key)
    }

    /// Raw member value
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `key` is absent.
    fn value(&self, key: &str) -> Result<&Value> {
        self.content()
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not a string, number or boolean.
    fn get_string(&self, key: &str) -> Result<String> {
        match self.value(key)? {
            Value::String(s) => Ok(s.clone()),
            v @ (Value::Number(_) | Value::Bool(_)) => Ok(v.to_string()),
            other => Err(mismatch(key, "string", other)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not an integer in range.
    fn get_i64(&self, key: &str) -> Result<i64> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| mismatch(key, "integer", value))
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not an integer in range.
    fn get_i32(&self, key: &str) -> Result<i32> {
        let wide = self.get_i64(key)?;
        i32::try_from(wide).map_err(|_| Error::TypeMismatch {
            key: key.to_string(),
            expected: "32-bit integer".into(),
            actual: wide.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not a number.
    fn get_f64(&self, key: &str) -> Result<f64> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| mismatch(key, "number", value))
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not a number.
    #[allow(clippy::cast_possible_truncation)]
    fn get_f32(&self, key: &str) -> Result<f32> {
        self.get_f64(key).map(|v| v as f32)
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not a boolean.
    fn get_bool(&self, key: &str) -> Result<bool> {
        let value = self.value(key)?;
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        };
        parsed.ok_or_else(|| mismatch(key, "boolean", value))
    }

    /// Member as an exact JSON number
    ///
    /// # Errors
    ///
    /// Returns an error if the member is absent or not a number.
    fn get_number(&self, key: &str) -> Result<Number> {
        match self.value(key)? {
            Value::Number(n) => Ok(n.clone()),
            other => Err(mismatch(key, "number", other)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not an array.
    fn get_list(&self, key: &str) -> Result<Vec<Value>> {
        match self.value(key)? {
            Value::Array(items) => Ok(items.clone()),
            other => Err(mismatch(key, "array", other)),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the member is absent or not an object.
    fn get_map(&self, key: &str) -> Result<Map<String, Value>> {
        match self.value(key)? {
            Value::Object(map) => Ok(map.clone()),
            other => Err(mismatch(key, "object", other)),
        }
    }

    /// Member converted into any deserializable shape
    ///
    /// # Errors
    ///
    /// Returns an error if the member is absent or does not fit `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T>
    where
        Self: Sized,
    {
        let value = self.value(key)?.clone();
        serde_json::from_value(value).map_err(|e| Error::TypeMismatch {
            key: key.to_string(),
            expected: std::any::type_name::<T>().into(),
            actual: e.to_string(),
        })
    }

    /// The whole object converted into `T`
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not fit `T`.
    fn get_as<T: DeserializeOwned>(&self) -> Result<T>
    where
        Self: Sized,
    {
        let value = Value::Object(self.content().clone());
        serde_json::from_value(value).map_err(|e| Error::TypeMismatch {
            key: "<root>".into(),
            expected: std::any::type_name::<T>().into(),
            actual: e.to_string(),
        })
    }
}

fn mismatch(key: &str, expected: &str, actual: &Value) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected: expected.to_string(),
        actual: type_name(actual).to_string(),
    }
}

impl JsonAccess for Map<String, Value> {
    fn content(&self) -> &Map<String, Value> {
        self
    }
}
