//! Error types for jfig

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for jfig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or absent JSON
    Parse,
    /// A value is present but cannot be converted to the requested shape
    Type,
    /// A naming strategy could not convert between a file name and a key
    Naming,
    /// Filesystem or network failure
    Io,
    /// Disallowed input or an operation on a locked component
    Validation,
}

/// Main error type for jfig
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file '{path}': {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Request to '{url}' failed: {reason}")]
    Http { url: String, reason: String },

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Type Errors
    // -------------------------------------------------------------------------
    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    // -------------------------------------------------------------------------
    // Naming Errors
    // -------------------------------------------------------------------------
    #[error("Cannot derive a key from file name '{name}': {reason}")]
    Naming { name: String, reason: String },

    #[error("Files '{}' and '{}' map to the same key '{key}'", .first.display(), .second.display())]
    NamingCollision {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Locked(String),

    #[error("File extension '{extension}' is not one of the allowed extensions {allowed:?}")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileRead { .. }
            | Error::FileWrite { .. }
            | Error::DirectoryCreate { .. }
            | Error::DirectoryRead { .. }
            | Error::FileDelete { .. }
            | Error::PathNotFound(_)
            | Error::Http { .. } => ErrorKind::Io,
            Error::Json(_) | Error::Parse(_) => ErrorKind::Parse,
            Error::TypeMismatch { .. } | Error::KeyNotFound(_) => ErrorKind::Type,
            Error::Naming { .. } | Error::NamingCollision { .. } => ErrorKind::Naming,
            Error::Locked(_) | Error::InvalidExtension { .. } | Error::Config(_) => {
                ErrorKind::Validation
            }
        }
    }

    /// Check if this is a "not found" type error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound(_) | Error::KeyNotFound(_))
    }

    /// Check if the operation was rejected because the component is locked
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Error::Locked(_))
    }
}

// =============================================================================
// Filesystem Helper Functions
// =============================================================================
// These reduce repetitive map_err patterns across the file-backed components.

/// Read a whole file as UTF-8 text
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replace the content of a file
pub(crate) fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Create a directory (and parents)
pub(crate) fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read directory entries
pub(crate) fn read_dir(path: &Path) -> Result<std::fs::ReadDir> {
    std::fs::read_dir(path).map_err(|e| Error::DirectoryRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Delete a file
pub(crate) fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| Error::FileDelete {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Short JSON type name used in mismatch messages
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::KeyNotFound("a".into()).kind(), ErrorKind::Type);
        assert_eq!(Error::Parse("bad".into()).kind(), ErrorKind::Parse);
        assert_eq!(
            Error::PathNotFound(PathBuf::from("/x")).kind(),
            ErrorKind::Io
        );
        assert_eq!(Error::Locked("locked".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            Error::Naming {
                name: "x".into(),
                reason: "bad".into()
            }
            .kind(),
            ErrorKind::Naming
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::KeyNotFound("a".into()).is_not_found());
        assert!(!Error::Config("a".into()).is_not_found());
    }
}
