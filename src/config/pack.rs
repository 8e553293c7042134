//! A set of bindings, each derived from its own file under one directory

use super::binding::Selectable;
use crate::codec::CodecProfile;
use crate::error::{Error, Result};
use crate::json::{JsonFile, JsonReader, Refreshable, expand_home};
use log::{debug, info};
use serde_json::Value;
use std::path::{Path, PathBuf};

struct PackField {
    name: String,
    file: JsonFile,
    binding: Box<dyn Selectable>,
}

/// Bindings loaded from and saved to individual files of a directory
///
/// ```text
/// data/
/// ├── players.json        ← "players"
/// └── maps/spawns.json    ← "spawns"
/// ```
pub struct ConfigurationPack {
    directory: PathBuf,
    profile: CodecProfile,
    fields: Vec<PackField>,
}

impl std::fmt::Debug for ConfigurationPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationPack")
            .field("directory", &self.directory)
            .field("profile", &self.profile)
            .field(
                "fields",
                &self.fields.iter().map(|f| &f.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ConfigurationPack {
    /// Pack rooted at `directory` (supports `~`)
    pub fn new(directory: impl Into<PathBuf>, profile: CodecProfile) -> Self {
        Self {
            directory: expand_home(directory.into()),
            profile,
            fields: Vec::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Bind `binding` to the file at `relative_path` (`/`-separated)
    ///
    /// The file is created with `{}` when missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `name` is already bound or
    /// `relative_path` contains a `..` segment, or an I/O error if the file
    /// cannot be prepared.
    pub fn bind(
        &mut self,
        name: impl Into<String>,
        relative_path: &str,
        binding: impl Selectable + 'static,
    ) -> Result<()> {
        let name = name.into();
        if self.fields.iter().any(|f| f.name == name) {
            return Err(Error::Config(format!("Field '{name}' is already bound")));
        }
        let parts: Vec<&str> = relative_path
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .collect();
        if parts.contains(&"..") {
            return Err(Error::Config(format!(
                "Path '{relative_path}' escapes the pack directory"
            )));
        }
        let relative: PathBuf = parts.into_iter().collect();
        let file = JsonFile::in_dir(&self.directory, relative, true)?;
        debug!("Bound {name} to {}", file.path().display());
        self.fields.push(PackField {
            name,
            file,
            binding: Box::new(binding),
        });
        Ok(())
    }

    /// File bound to `name`
    pub fn file(&self, name: &str) -> Option<&JsonFile> {
        self.field(name).ok().map(|f| &f.file)
    }

    /// Restore the binding `name` from its file
    ///
    /// An empty object or empty array leaves the binding untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if nothing is bound to `name`, or an
    /// error if the file cannot be parsed into the binding.
    pub fn update_field(&self, name: &str) -> Result<()> {
        update(self.field(name)?)
    }

    /// Write the binding `name` to its file
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if nothing is bound to `name`, or an
    /// error if serialization or writing fails.
    pub fn save_field(&self, name: &str) -> Result<()> {
        save(self.field(name)?, self.profile)
    }

    /// Restore every binding from its file
    ///
    /// # Errors
    ///
    /// Returns the first error of [`ConfigurationPack::update_field`].
    pub fn load(&self) -> Result<()> {
        for field in &self.fields {
            update(field)?;
        }
        info!(
            "Loaded {} pack fields from {}",
            self.fields.len(),
            self.directory.display()
        );
        Ok(())
    }

    /// Write every binding to its file
    ///
    /// # Errors
    ///
    /// Returns the first error of [`ConfigurationPack::save_field`].
    pub fn save(&self) -> Result<()> {
        for field in &self.fields {
            save(field, self.profile)?;
        }
        Ok(())
    }

    fn field(&self, name: &str) -> Result<&PackField> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }
}

impl Refreshable for ConfigurationPack {
    fn refresh(&mut self) -> Result<()> {
        self.load()
    }
}

fn update(field: &PackField) -> Result<()> {
    let content = JsonReader::new(field.file.clone()).parse_as_value()?;
    let empty = match &content {
        Value::Object(map) => map.is_empty(),
        Value::Array(list) => list.is_empty(),
        _ => false,
    };
    if empty {
        debug!("{} is empty, keeping current value", field.file.path().display());
        return Ok(());
    }
    field.binding.restore(content)
}

fn save(field: &PackField, profile: CodecProfile) -> Result<()> {
    let snapshot = field.binding.snapshot(profile)?;
    field.file.write_str(&profile.to_string(&snapshot)?)
}
