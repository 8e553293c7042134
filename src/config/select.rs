//! Configuration whose entries are bound to application values

use super::binding::{FnBinding, Selectable};
use crate::codec::CodecProfile;
use crate::error::Result;
use crate::json::{JsonAccess, JsonFile, JsonWriter, Lockable, Refreshable};
use log::{debug, trace};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Where a binding lives in the configuration's root object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectKey {
    name: String,
    classpath: bool,
}

impl SelectKey {
    /// Key stored under `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classpath: false,
        }
    }

    /// Key for the field `field`, stored under `value` unless it is empty
    pub fn for_field(field: &str, value: &str) -> Self {
        Self::new(if value.is_empty() { field } else { value })
    }

    /// Prefix the stored name with the owner (`owner.name`)
    #[must_use]
    pub fn classpath(mut self, classpath: bool) -> Self {
        self.classpath = classpath;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_classpath(&self) -> bool {
        self.classpath
    }

    fn resolve(&self, owner: &str, classpath: bool) -> String {
        if classpath || self.classpath {
            format!("{owner}.{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl From<&str> for SelectKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SelectKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

struct Registration {
    owner: String,
    key: SelectKey,
    binding: Box<dyn Selectable>,
}

/// A JSON file whose members are synchronized with registered bindings
///
/// # Example
///
/// ```rust,no_run
/// use jfig::{JsonFile, SelectableConfiguration, SelectionHolder};
///
/// # fn main() -> jfig::Result<()> {
/// let theme = SelectionHolder::new(String::from("light"));
///
/// let mut config = SelectableConfiguration::open(JsonFile::new("ui.json")?)?;
/// config.register("ui", "theme", theme.clone());
/// config.associate()?;
///
/// theme.set("dark".into());
/// config.save()?;
/// # Ok(())
/// # }
/// ```
pub struct SelectableConfiguration {
    writer: JsonWriter,
    profile: CodecProfile,
    classpath: bool,
    locked: bool,
    registrations: Vec<Registration>,
}

impl std::fmt::Debug for SelectableConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectableConfiguration")
            .field("file", self.writer.file())
            .field("profile", &self.profile)
            .field("classpath", &self.classpath)
            .field("locked", &self.locked)
            .field("keys", &self.keys())
            .finish()
    }
}

impl SelectableConfiguration {
    /// Load `file` as a selectable configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(file: JsonFile) -> Result<Self> {
        Ok(Self {
            writer: JsonWriter::new(file)?,
            profile: CodecProfile::Pretty,
            classpath: false,
            locked: false,
            registrations: Vec::new(),
        })
    }

    /// Load `file` as a configuration that cannot be repointed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn locked(file: JsonFile) -> Result<Self> {
        let mut config = Self::open(file)?;
        config.locked = true;
        Ok(config)
    }

    /// Prefix every key with its owner
    #[must_use]
    pub fn classpath(mut self, classpath: bool) -> Self {
        self.classpath = classpath;
        self
    }

    /// Profile used for snapshots and saving
    #[must_use]
    pub fn with_profile(mut self, profile: CodecProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn is_classpath(&self) -> bool {
        self.classpath
    }

    pub fn profile(&self) -> CodecProfile {
        self.profile
    }

    /// Register `binding` under `key` for `owner`
    ///
    /// Returns `false` (and drops `binding`) when `owner` already registered
    /// `key`.
    pub fn register(
        &mut self,
        owner: impl Into<String>,
        key: impl Into<SelectKey>,
        binding: impl Selectable + 'static,
    ) -> bool {
        let owner = owner.into();
        let key = key.into();
        if self
            .registrations
            .iter()
            .any(|r| r.owner == owner && r.key.name == key.name)
        {
            debug!("Ignoring duplicate registration {owner}/{}", key.name);
            return false;
        }
        self.registrations.push(Registration {
            owner,
            key,
            binding: Box::new(binding),
        });
        true
    }

    /// Register a getter/setter pair under `key` for `owner`
    pub fn register_fn<T, G, S>(
        &mut self,
        owner: impl Into<String>,
        key: impl Into<SelectKey>,
        getter: G,
        setter: S,
    ) -> bool
    where
        T: Serialize + DeserializeOwned + 'static,
        G: Fn() -> T + 'static,
        S: Fn(T) + 'static,
    {
        self.register(owner, key, FnBinding::new(getter, setter))
    }

    /// Stored keys of all registrations, in registration order
    pub fn keys(&self) -> Vec<String> {
        self.registrations
            .iter()
            .map(|r| r.key.resolve(&r.owner, self.classpath))
            .collect()
    }

    /// Synchronize registrations with the loaded content
    ///
    /// Keys missing from the content are seeded from their binding. Keys
    /// present are restored into their binding, and the content entry is
    /// replaced by the binding's normalized snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value does not fit its binding or a
    /// binding cannot be represented as JSON.
    pub fn associate(&mut self) -> Result<()> {
        let content = self.writer.cached_object_mut();
        for registration in &self.registrations {
            let key = registration.key.resolve(&registration.owner, self.classpath);
            if let Some(stored) = content.get(&key) {
                trace!("Restoring {key} from content");
                registration.binding.restore(stored.clone())?;
            } else {
                trace!("Seeding {key} from its binding");
            }
            let normalized = registration.binding.snapshot(self.profile)?;
            content.insert(key, normalized);
        }
        Ok(())
    }

    /// Snapshot every binding into the content and write the file
    ///
    /// # Errors
    ///
    /// Returns an error if a binding cannot be represented as JSON or the
    /// file cannot be written.
    pub fn save(&mut self) -> Result<()> {
        let content = self.writer.cached_object_mut();
        for registration in &self.registrations {
            let key = registration.key.resolve(&registration.owner, self.classpath);
            content.insert(key, registration.binding.snapshot(self.profile)?);
        }
        self.writer
            .overwrite(self.writer.cached_object(), self.profile)?;
        debug!(
            "Saved {} bound keys to {}",
            self.registrations.len(),
            self.writer.file().path().display()
        );
        Ok(())
    }

    /// Remove `key` from the content
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.writer.cached_object_mut().remove(key)
    }
}

impl JsonAccess for SelectableConfiguration {
    fn content(&self) -> &Map<String, Value> {
        self.writer.cached_object()
    }
}

impl Lockable for SelectableConfiguration {
    fn is_locked(&self) -> bool {
        self.locked
    }

    fn file(&self) -> &JsonFile {
        self.writer.file()
    }

    fn set_file(&mut self, file: JsonFile) -> Result<()> {
        self.check_locked("Cannot repoint a locked SelectableConfiguration")?;
        self.writer.set_file(file)
    }
}

impl Refreshable for SelectableConfiguration {
    /// Reloads the content from disk; bindings are untouched until the next
    /// [`SelectableConfiguration::associate`].
    fn refresh(&mut self) -> Result<()> {
        self.writer.refresh()
    }
}
