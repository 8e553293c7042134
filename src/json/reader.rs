//! Parsing JSON files into value trees or typed shapes

use crate::error::{Error, Result};
use crate::json::{JsonFile, Lockable, Refreshable};
use crate::utils;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Reads and parses a [`JsonFile`]
///
/// Every call reads the whole file and releases it before returning, so no
/// handle outlives the call.
#[derive(Debug, Clone)]
pub struct JsonReader {
    file: JsonFile,
    locked: bool,
}

impl JsonReader {
    /// Create a reader that can be repointed with [`Lockable::set_file`]
    pub fn new(file: JsonFile) -> Self {
        Self {
            file,
            locked: false,
        }
    }

    /// Create a reader permanently bound to `file`
    pub fn locked(file: JsonFile) -> Self {
        Self { file, locked: true }
    }

    /// Parse the file into a value tree
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error if
    /// its content is not valid JSON.
    pub fn parse_as_value(&self) -> Result<Value> {
        utils::parse_value(&self.file.read_to_string()?)
    }

    /// Parse the file, requiring an object root
    ///
    /// # Errors
    ///
    /// As [`JsonReader::parse_as_value`], plus [`Error::TypeMismatch`] if the
    /// root is not an object.
    pub fn parse_as_object(&self) -> Result<Map<String, Value>> {
        let origin = self.file.path().display().to_string();
        utils::into_object(self.parse_as_value()?, &origin)
    }

    /// Parse the file and convert it into `T`
    ///
    /// # Errors
    ///
    /// Returns a parse error if the content is invalid or its root is
    /// `null`, or if it does not fit `T`.
    pub fn deserialize_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.parse_as_value()?;
        if value.is_null() {
            return Err(Error::Parse(format!(
                "Could not parse JSON from file {}. Object to parse: {}",
                self.file.path().display(),
                std::any::type_name::<T>()
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Convert the member `key` of the root object into `T`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the member is absent, or a
    /// parse/type error if the file or member cannot be converted.
    pub fn deserialize_field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let mut object = self.parse_as_object()?;
        let value = object
            .remove(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Lockable for JsonReader {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn file(&self) -> &JsonFile {
        &self.file
    }

    fn set_file(&mut self, file: JsonFile) -> Result<()> {
        self.check_locked("Cannot repoint a locked JsonReader")?;
        self.file = file;
        Ok(())
    }
}

impl Refreshable for JsonReader {
    /// Readers hold no cache; this only checks the file is still readable.
    fn refresh(&mut self) -> Result<()> {
        self.file.read_to_string().map(|_| ())
    }
}
