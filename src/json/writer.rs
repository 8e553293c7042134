//! Cached read-modify-write access to a JSON file

use crate::codec::CodecProfile;
use crate::error::Result;
use crate::json::{JsonFile, JsonReader, Lockable, Refreshable};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

/// Writes to a [`JsonFile`] through a cached copy of its root object
///
/// The cache is loaded once at construction (and on refresh). Key-level
/// mutations update the cache and then rewrite the whole file from it; they
/// never re-read the file, so two writers bound to one path silently
/// overwrite each other.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    file: JsonFile,
    element: Value,
    content: Map<String, Value>,
    locked: bool,
}

impl JsonWriter {
    /// Create a writer and load its cache from `file`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn new(file: JsonFile) -> Result<Self> {
        Self::with_lock(file, false)
    }

    /// Create a writer that refuses [`Lockable::set_file`]
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn locked(file: JsonFile) -> Result<Self> {
        Self::with_lock(file, true)
    }

    fn with_lock(file: JsonFile, locked: bool) -> Result<Self> {
        let (element, content) = load(&file)?;
        Ok(Self {
            file,
            element,
            content,
            locked,
        })
    }

    /// Serialize `value` and replace the whole file with it
    ///
    /// The cache is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn overwrite<T: Serialize + ?Sized>(&self, value: &T, profile: CodecProfile) -> Result<()> {
        let text = profile.to_string(value)?;
        self.file.write_str(&text)?;
        debug!("Overwrote {}", self.file.path().display());
        Ok(())
    }

    /// Set `key` in the cache and write the cache out
    ///
    /// When `key` already exists and `override_existing` is false nothing
    /// happens and the untouched cache is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn upsert<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
        profile: CodecProfile,
        override_existing: bool,
    ) -> Result<&Map<String, Value>> {
        if self.member_exists(key) && !override_existing {
            return Ok(&self.content);
        }
        let value = profile.to_value(value)?;
        self.content.insert(key.to_string(), value);
        self.write_cache(profile)?;
        Ok(&self.content)
    }

    /// Remove `key` from the cache (if present) and write the cache out
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn delete_key(&mut self, key: &str, profile: CodecProfile) -> Result<&Map<String, Value>> {
        self.content.remove(key);
        self.write_cache(profile)?;
        Ok(&self.content)
    }

    /// Whether the cache holds `key`
    pub fn member_exists(&self, key: &str) -> bool {
        self.content.contains_key(key)
    }

    /// Cached root object (empty when the root is not an object)
    pub fn cached_object(&self) -> &Map<String, Value> {
        &self.content
    }

    /// Cached root value as it was parsed
    pub fn cached_element(&self) -> &Value {
        &self.element
    }

    pub(crate) fn cached_object_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.content
    }

    fn write_cache(&self, profile: CodecProfile) -> Result<()> {
        self.overwrite(&self.content, profile)
    }

    fn reload(&mut self) -> Result<()> {
        let (element, content) = load(&self.file)?;
        self.element = element;
        self.content = content;
        Ok(())
    }
}

fn load(file: &JsonFile) -> Result<(Value, Map<String, Value>)> {
    let element = JsonReader::new(file.clone()).parse_as_value()?;
    let content = match &element {
        Value::Object(map) => map.clone(),
        _ => {
            warn!(
                "Root of {} is not an object, starting from an empty one",
                file.path().display()
            );
            Map::new()
        }
    };
    Ok((element, content))
}

impl Lockable for JsonWriter {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn file(&self) -> &JsonFile {
        &self.file
    }

    fn set_file(&mut self, file: JsonFile) -> Result<()> {
        self.check_locked("Cannot repoint a locked JsonWriter")?;
        self.file = file;
        self.reload()
    }
}

impl Refreshable for JsonWriter {
    fn refresh(&mut self) -> Result<()> {
        self.reload()
    }
}
