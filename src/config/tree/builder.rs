//! Builder for [`TreeConfiguration`]

use super::{NamingStrategy, TreeConfiguration, TreeFileFilter};
use crate::codec::CodecProfile;
use crate::error::{Error, Result};
use crate::json::expand_home;
use std::collections::HashMap;
use std::path::PathBuf;

/// Fluent construction of a [`TreeConfiguration`]
///
/// # Example
///
/// ```rust,no_run
/// use jfig::{StringNamingStrategy, TreeConfiguration};
/// use serde_json::Value;
///
/// # fn main() -> jfig::Result<()> {
/// let mut remotes: TreeConfiguration<StringNamingStrategy, Value> =
///     TreeConfiguration::builder("~/.config/my-app/remotes", StringNamingStrategy)
///         .restricted_extensions(["json"])
///         .exclusion_prefixes(["_", "."])
///         .ignore_invalid_files(true)
///         .build()?;
///
/// remotes.load()?;
/// # Ok(())
/// # }
/// ```
pub struct TreeConfigurationBuilder<N: NamingStrategy, V> {
    directory: PathBuf,
    naming: N,
    profile: CodecProfile,
    search_subdirectories: bool,
    exclusion_prefixes: Option<Vec<String>>,
    restricted_extensions: Option<Vec<String>>,
    ignore_invalid_files: bool,
    data: HashMap<N::Key, V>,
}

impl<N: NamingStrategy, V> std::fmt::Debug for TreeConfigurationBuilder<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeConfigurationBuilder")
            .field("directory", &self.directory)
            .field("profile", &self.profile)
            .field("search_subdirectories", &self.search_subdirectories)
            .field("exclusion_prefixes", &self.exclusion_prefixes)
            .field("restricted_extensions", &self.restricted_extensions)
            .field("ignore_invalid_files", &self.ignore_invalid_files)
            .field("data", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl<N, V> TreeConfigurationBuilder<N, V>
where
    N: NamingStrategy,
    N::Key: Eq + std::hash::Hash + Clone,
{
    /// Create a builder for the files in `directory`
    ///
    /// Supports `~` expansion for home directory.
    pub fn new(directory: impl Into<PathBuf>, naming: N) -> Self {
        Self {
            directory: expand_home(directory.into()),
            naming,
            profile: CodecProfile::Pretty,
            search_subdirectories: false,
            exclusion_prefixes: None,
            restricted_extensions: None,
            ignore_invalid_files: false,
            data: HashMap::new(),
        }
    }

    /// Profile used when writing entries (default: pretty)
    #[must_use]
    pub fn profile(mut self, profile: CodecProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Flatten matching files of subdirectories into the mapping
    #[must_use]
    pub fn search_subdirectories(mut self, search: bool) -> Self {
        self.search_subdirectories = search;
        self
    }

    /// Ignore files whose name starts with any of `prefixes`
    ///
    /// At least one prefix must be given; this is checked by `build`.
    #[must_use]
    pub fn exclusion_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Only manage files with one of `extensions` (without the dot)
    ///
    /// At least one extension must be given; this is checked by `build`.
    #[must_use]
    pub fn restricted_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Skip files that cannot be named or parsed instead of failing
    #[must_use]
    pub fn ignore_invalid_files(mut self, ignore: bool) -> Self {
        self.ignore_invalid_files = ignore;
        self
    }

    /// Initial in-memory mapping
    #[must_use]
    pub fn data(mut self, data: HashMap<N::Key, V>) -> Self {
        self.data = data;
        self
    }

    /// Build the configuration and discover its files
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the directory is not a directory or an
    /// empty prefix/extension list was given, or an I/O error if listing
    /// the directory fails.
    pub fn build(self) -> Result<TreeConfiguration<N, V>> {
        if !self.directory.is_dir() {
            return Err(Error::Config(format!(
                "'{}' is not a directory",
                self.directory.display()
            )));
        }
        if self.exclusion_prefixes.as_ref().is_some_and(Vec::is_empty) {
            return Err(Error::Config(
                "Exclusion prefixes must contain at least one element".into(),
            ));
        }
        if self.restricted_extensions.as_ref().is_some_and(Vec::is_empty) {
            return Err(Error::Config(
                "Restricted extensions must contain at least one element".into(),
            ));
        }

        let filter = TreeFileFilter {
            exclusion_prefixes: self.exclusion_prefixes.unwrap_or_default(),
            restricted_extensions: self.restricted_extensions.unwrap_or_default(),
            search_subdirectories: self.search_subdirectories,
        };

        TreeConfiguration::from_parts(
            self.directory,
            self.naming,
            self.profile,
            filter,
            self.ignore_invalid_files,
            self.data,
        )
    }
}
