//! Selection of the files a tree configuration manages

use crate::error::{self, Result};
use std::path::{Path, PathBuf};

/// Decides which directory entries belong to a tree configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeFileFilter {
    pub exclusion_prefixes: Vec<String>,
    pub restricted_extensions: Vec<String>,
    pub search_subdirectories: bool,
}

impl TreeFileFilter {
    /// Whether `path` is accepted
    ///
    /// Directories are accepted only when subdirectories are searched. Files
    /// are accepted when their name starts with no exclusion prefix and, if
    /// extensions are restricted, their extension is allowed.
    pub fn accept(&self, path: &Path) -> bool {
        if path.is_dir() {
            return self.search_subdirectories;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if self
            .exclusion_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        {
            return false;
        }

        self.extension_allowed(path.extension().and_then(|e| e.to_str()).unwrap_or(""))
    }

    /// Whether files with `extension` may be managed
    pub fn extension_allowed(&self, extension: &str) -> bool {
        self.restricted_extensions.is_empty()
            || self.restricted_extensions.iter().any(|e| e == extension)
    }

    /// All accepted files under `directory`, flattening accepted
    /// subdirectories, in sorted order
    ///
    /// Symbolic links to directories are not followed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DirectoryRead`] if a directory cannot be listed.
    pub fn collect(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.walk(directory, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn walk(&self, directory: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in error::read_dir(directory)? {
            let entry = entry.map_err(|e| crate::Error::DirectoryRead {
                path: directory.to_path_buf(),
                source: e,
            })?;
            let file_type = entry.file_type().map_err(|e| crate::Error::DirectoryRead {
                path: directory.to_path_buf(),
                source: e,
            })?;
            let path = entry.path();
            // a symlink resolving to a directory is neither walked nor kept
            if file_type.is_dir() {
                if self.search_subdirectories {
                    self.walk(&path, files)?;
                }
            } else if !path.is_dir() && self.accept(&path) {
                files.push(path);
            }
        }
        Ok(())
    }
}
