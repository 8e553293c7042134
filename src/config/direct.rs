//! Key/value configuration backed by a single JSON file

use crate::codec::CodecProfile;
use crate::error::{Error, Result};
use crate::json::{JsonAccess, JsonFile, JsonWriter, Lockable, Refreshable};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

/// Typed getters and setters over one JSON file's root object
///
/// Setters only touch the in-memory content; nothing reaches the disk until
/// [`DirectConfiguration::save`] is called.
///
/// # Example
///
/// ```rust,no_run
/// use jfig::{DirectConfiguration, JsonAccess, JsonFile};
///
/// # fn main() -> jfig::Result<()> {
/// let mut config = DirectConfiguration::new(JsonFile::new("config.json")?)?;
/// config.set("theme", &"dark")?;
/// config.save()?;
///
/// let theme = config.get_string("theme")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectConfiguration {
    writer: JsonWriter,
    profile: CodecProfile,
    locked: bool,
}

impl DirectConfiguration {
    /// Load a configuration from `file`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn new(file: JsonFile) -> Result<Self> {
        Ok(Self {
            writer: JsonWriter::new(file)?,
            profile: CodecProfile::Pretty,
            locked: false,
        })
    }

    /// Load a configuration that refuses to be repointed at another file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn locked(file: JsonFile) -> Result<Self> {
        let mut config = Self::new(file)?;
        config.locked = true;
        Ok(config)
    }

    /// Profile used by [`DirectConfiguration::set`] and [`DirectConfiguration::save`]
    #[must_use]
    pub fn with_profile(mut self, profile: CodecProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> CodecProfile {
        self.profile
    }

    /// Set `key` in memory
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        self.set_with(key, value, self.profile)
    }

    /// Set `key` in memory, serializing `value` with `profile`
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn set_with<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
        profile: CodecProfile,
    ) -> Result<()> {
        let value = profile.to_value(value)?;
        self.writer
            .cached_object_mut()
            .insert(key.to_string(), value);
        Ok(())
    }

    /// Remove `key` from memory, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.writer.cached_object_mut().remove(key)
    }

    /// Write the whole content to disk
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self) -> Result<()> {
        self.save_as(self.profile)
    }

    /// Write the whole content to disk with `profile`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_as(&self, profile: CodecProfile) -> Result<()> {
        self.writer.overwrite(self.writer.cached_object(), profile)?;
        debug!("Saved configuration {}", self.writer.file().path().display());
        Ok(())
    }

    /// Write the whole content to disk, handing any failure to `on_error`
    pub fn save_with<F>(&self, profile: CodecProfile, on_error: F)
    where
        F: FnOnce(Error),
    {
        if let Err(e) = self.save_as(profile) {
            warn!(
                "Saving {} failed: {e}",
                self.writer.file().path().display()
            );
            on_error(e);
        }
    }
}

impl JsonAccess for DirectConfiguration {
    fn content(&self) -> &Map<String, Value> {
        self.writer.cached_object()
    }
}

impl Lockable for DirectConfiguration {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn file(&self) -> &JsonFile {
        self.writer.file()
    }

    fn set_file(&mut self, file: JsonFile) -> Result<()> {
        self.check_locked("Cannot repoint a locked DirectConfiguration")?;
        self.writer.set_file(file)
    }
}

impl Refreshable for DirectConfiguration {
    /// Reloads from the bound file. Allowed on locked configurations since
    /// the target does not change.
    fn refresh(&mut self) -> Result<()> {
        self.writer.refresh()
    }
}
