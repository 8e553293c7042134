//! File handle for JSON-bearing files

use crate::error::{self, Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

const EMPTY_JSON: &str = "{}";

/// A path to a file that is guaranteed to hold parseable JSON
///
/// Opening a missing file (with creation enabled) or a blank file writes
/// `{}` to it, so parsing never fails on missing or empty files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Open `path`, creating it when missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directories cannot be
    /// created, or an existing file cannot be read.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, true)
    }

    /// Open `path`
    ///
    /// A leading `~` expands to the home directory. A missing file is
    /// created and initialized to `{}` when `create_if_missing` is set; an
    /// existing blank file is always initialized to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if the file is absent and
    /// `create_if_missing` is false, or an I/O error if preparing the file
    /// fails.
    pub fn open(path: impl Into<PathBuf>, create_if_missing: bool) -> Result<Self> {
        let file = Self {
            path: expand_home(path.into()),
        };
        file.prepare(create_if_missing)?;
        Ok(file)
    }

    /// Open `child` inside `parent`
    ///
    /// # Errors
    ///
    /// See [`JsonFile::open`].
    pub fn in_dir(
        parent: impl AsRef<Path>,
        child: impl AsRef<Path>,
        create_if_missing: bool,
    ) -> Result<Self> {
        Self::open(parent.as_ref().join(child), create_if_missing)
    }

    fn prepare(&self, create: bool) -> Result<()> {
        if !self.path.exists() {
            if !create {
                return Err(Error::PathNotFound(self.path.clone()));
            }
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.exists() {
                    error::create_dir(parent)?;
                }
            }
            debug!("Creating JSON file {}", self.path.display());
            return error::write_file(&self.path, EMPTY_JSON);
        }

        if self.read_to_string()?.trim().is_empty() {
            debug!("Initializing blank JSON file {}", self.path.display());
            error::write_file(&self.path, EMPTY_JSON)?;
        }
        Ok(())
    }

    /// Location of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file currently exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// File name without its extension
    pub fn base_name(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    /// Read the whole file as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if reading fails.
    pub fn read_to_string(&self) -> Result<String> {
        error::read_file(&self.path)
    }

    /// Replace the whole file content
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if writing fails.
    pub fn write_str(&self, text: &str) -> Result<()> {
        error::write_file(&self.path, text)
    }

    /// Delete the file from disk
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDelete`] if removal fails.
    pub fn delete(&self) -> Result<()> {
        error::remove_file(&self.path)
    }
}

impl AsRef<Path> for JsonFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Expand a leading `~` to the home directory
pub(crate) fn expand_home(path: PathBuf) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.strip_prefix("~").unwrap_or(&path));
        }
    }
    path
}
