//! Mappings between file base names and typed keys

use crate::error::Result;

/// Converts between a file's base name (extension stripped) and a key
///
/// Implementations must be a bijection over the names they accept:
/// `from_name(&to_name(k)) == k` for every key `k`.
pub trait NamingStrategy {
    /// Key type produced from file names
    type Key;

    /// File base name for `key`
    fn to_name(&self, key: &Self::Key) -> String;

    /// Key encoded by a file base name
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Naming`] when `name` does not encode a key.
    fn from_name(&self, name: &str) -> Result<Self::Key>;
}

/// Uses file base names as keys unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringNamingStrategy;

impl NamingStrategy for StringNamingStrategy {
    type Key = String;

    fn to_name(&self, key: &String) -> String {
        key.clone()
    }

    fn from_name(&self, name: &str) -> Result<String> {
        Ok(name.to_string())
    }
}

/// Files named by the hyphenated form of a UUID
#[cfg(feature = "uuid")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidNamingStrategy;

#[cfg(feature = "uuid")]
impl NamingStrategy for UuidNamingStrategy {
    type Key = uuid::Uuid;

    fn to_name(&self, key: &uuid::Uuid) -> String {
        key.hyphenated().to_string()
    }

    fn from_name(&self, name: &str) -> Result<uuid::Uuid> {
        uuid::Uuid::parse_str(name).map_err(|e| crate::Error::Naming {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}
