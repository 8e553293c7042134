//! One configuration entry per file in a directory
//!
//! A [`TreeConfiguration`] maps every accepted file of a directory to a typed
//! value, keyed by what a [`NamingStrategy`] derives from the file's base
//! name:
//!
//! ```text
//! remotes/
//! ├── gdrive.json    → "gdrive"  => Remote { .. }
//! ├── s3.json        → "s3"      => Remote { .. }
//! └── _draft.json    (excluded by prefix)
//! ```

mod builder;
mod filter;
mod naming;

pub use builder::TreeConfigurationBuilder;
pub use filter::TreeFileFilter;
#[cfg(feature = "uuid")]
pub use naming::UuidNamingStrategy;
pub use naming::{NamingStrategy, StringNamingStrategy};

use crate::codec::CodecProfile;
use crate::error::{self, Error, ErrorKind, Result};
use crate::json::{JsonFile, JsonReader};
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Typed entries stored one per file under a directory
///
/// Files are discovered when the configuration is built and again on
/// [`TreeConfiguration::refresh_files`]; [`TreeConfiguration::load`] only
/// reads the files already tracked.
pub struct TreeConfiguration<N: NamingStrategy, V> {
    directory: PathBuf,
    naming: N,
    profile: CodecProfile,
    filter: TreeFileFilter,
    ignore_invalid_files: bool,
    data: HashMap<N::Key, V>,
    key_files: HashMap<N::Key, PathBuf>,
    files: Vec<PathBuf>,
    loaded: bool,
}

impl<N: NamingStrategy, V> std::fmt::Debug for TreeConfiguration<N, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeConfiguration")
            .field("directory", &self.directory)
            .field("profile", &self.profile)
            .field("filter", &self.filter)
            .field("ignore_invalid_files", &self.ignore_invalid_files)
            .field("entries", &self.data.len())
            .field("files", &self.files)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl<N, V> TreeConfiguration<N, V>
where
    N: NamingStrategy,
    N::Key: Eq + Hash + Clone,
{
    /// Start building a configuration over `directory`
    pub fn builder(directory: impl Into<PathBuf>, naming: N) -> TreeConfigurationBuilder<N, V> {
        TreeConfigurationBuilder::new(directory, naming)
    }

    pub(crate) fn from_parts(
        directory: PathBuf,
        naming: N,
        profile: CodecProfile,
        filter: TreeFileFilter,
        ignore_invalid_files: bool,
        data: HashMap<N::Key, V>,
    ) -> Result<Self> {
        let files = filter.collect(&directory)?;
        debug!(
            "Tree configuration at {} tracks {} file(s)",
            directory.display(),
            files.len()
        );
        Ok(Self {
            directory,
            naming,
            profile,
            filter,
            ignore_invalid_files,
            data,
            key_files: HashMap::new(),
            files,
            loaded: false,
        })
    }

    /// Directory holding the entries
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Profile used when writing entries
    pub fn profile(&self) -> CodecProfile {
        self.profile
    }

    /// Tracked files, in sorted order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Current mapping
    pub fn data(&self) -> &HashMap<N::Key, V> {
        &self.data
    }

    /// Whether [`TreeConfiguration::load`] has completed at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Entry for `key`
    pub fn get(&self, key: &N::Key) -> Option<&V> {
        self.data.get(key)
    }

    /// Whether data has been loaded and contains `key`
    pub fn has_data(&self, key: &N::Key) -> bool {
        self.loaded && self.data.contains_key(key)
    }

    /// Whether `prefix` is one of the configured exclusion prefixes
    pub fn is_exclusion_prefix(&self, prefix: &str) -> bool {
        self.filter.exclusion_prefixes.iter().any(|p| p == prefix)
    }

    /// Whether files with `extension` may be managed
    ///
    /// Any extension is allowed when no restriction was configured.
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        self.filter.extension_allowed(extension)
    }

    /// Re-walk the directory and replace the tracked file list
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn refresh_files(&mut self) -> Result<()> {
        self.files = self.filter.collect(&self.directory)?;
        self.key_files.retain(|_, path| self.files.contains(path));
        debug!(
            "Refreshed {}: {} file(s)",
            self.directory.display(),
            self.files.len()
        );
        Ok(())
    }

    /// Stop tracking the entry for `key`, leaving its file on disk
    ///
    /// Returns the file the entry was read from, if any.
    pub fn exclude(&mut self, key: &N::Key) -> Option<PathBuf> {
        self.data.remove(key)?;
        self.untrack(key)
    }

    /// Builder carrying this configuration's settings (without its data)
    #[must_use]
    pub fn as_builder(&self) -> TreeConfigurationBuilder<N, V>
    where
        N: Clone,
    {
        let mut builder = TreeConfigurationBuilder::new(self.directory.clone(), self.naming.clone())
            .profile(self.profile)
            .search_subdirectories(self.filter.search_subdirectories)
            .ignore_invalid_files(self.ignore_invalid_files);
        if !self.filter.exclusion_prefixes.is_empty() {
            builder = builder.exclusion_prefixes(self.filter.exclusion_prefixes.clone());
        }
        if !self.filter.restricted_extensions.is_empty() {
            builder = builder.restricted_extensions(self.filter.restricted_extensions.clone());
        }
        builder
    }

    fn key_for(&self, path: &Path) -> Result<N::Key> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Naming {
                name: path.display().to_string(),
                reason: "file name is not valid UTF-8".into(),
            })?;
        self.naming.from_name(name)
    }

    /// Whether a failure for one file may be skipped
    fn skippable(&self, err: &Error) -> bool {
        self.ignore_invalid_files
            && !matches!(err, Error::NamingCollision { .. })
            && matches!(
                err.kind(),
                ErrorKind::Naming | ErrorKind::Parse | ErrorKind::Type
            )
    }

    fn file_for(&self, key: &N::Key, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.naming.to_name(key), extension))
    }

    /// File backing `key`: the one it was loaded from or written to, else
    /// the tracked file whose base name encodes it
    fn file_of(&self, key: &N::Key) -> Option<PathBuf> {
        if let Some(path) = self.key_files.get(key) {
            return Some(path.clone());
        }
        let name = self.naming.to_name(key);
        self.files
            .iter()
            .find(|f| f.file_stem().and_then(|s| s.to_str()) == Some(name.as_str()))
            .cloned()
    }

    /// Stop tracking the file backing `key`, returning it
    fn untrack(&mut self, key: &N::Key) -> Option<PathBuf> {
        let path = self.file_of(key)?;
        self.key_files.remove(key);
        self.files.retain(|f| f != &path);
        Some(path)
    }

    fn track(&mut self, key: N::Key, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path.clone());
            self.files.sort();
        }
        self.key_files.insert(key, path);
    }
}

impl<N, V> TreeConfiguration<N, V>
where
    N: NamingStrategy,
    N::Key: Eq + Hash + Clone,
    V: Serialize + DeserializeOwned,
{
    /// Read every tracked file into the mapping
    ///
    /// The previous mapping is kept unless every file loads (or is skipped
    /// under `ignore_invalid_files`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NamingCollision`] if two files map to the same key,
    /// or the first naming, parse or I/O error of a file that may not be
    /// skipped.
    pub fn load(&mut self) -> Result<&HashMap<N::Key, V>> {
        let mut data = HashMap::with_capacity(self.files.len());
        let mut key_files: HashMap<N::Key, PathBuf> = HashMap::with_capacity(self.files.len());

        for path in &self.files {
            let key = match self.key_for(path) {
                Ok(key) => key,
                Err(e) if self.skippable(&e) => {
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(first) = key_files.get(&key) {
                return Err(Error::NamingCollision {
                    key: self.naming.to_name(&key),
                    first: first.clone(),
                    second: path.clone(),
                });
            }

            let value = match read_entry::<V>(path) {
                Ok(value) => value,
                Err(e) if self.skippable(&e) => {
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
                Err(e) => return Err(e),
            };

            key_files.insert(key.clone(), path.clone());
            data.insert(key, value);
        }

        info!(
            "Loaded {} entries from {}",
            data.len(),
            self.directory.display()
        );
        self.data = data;
        self.key_files = key_files;
        self.loaded = true;
        Ok(&self.data)
    }

    /// Write `value` to a new file for `key` and add it to the mapping
    ///
    /// When `key` was backed by a file with another extension, that file is
    /// deleted so the key keeps exactly one file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtension`] if `extension` is not allowed, or
    /// an error if serialization or writing fails.
    pub fn create(&mut self, key: N::Key, value: V, extension: &str) -> Result<&V> {
        if !self.filter.extension_allowed(extension) {
            return Err(Error::InvalidExtension {
                extension: extension.to_string(),
                allowed: self.filter.restricted_extensions.clone(),
            });
        }

        let path = self.file_for(&key, extension);
        error::write_file(&path, self.profile.to_string(&value)?)?;
        debug!("Created entry file {}", path.display());

        if let Some(previous) = self.file_of(&key).filter(|p| p != &path) {
            self.untrack(&key);
            if previous.exists() {
                error::remove_file(&previous)?;
            }
            debug!("Replaced entry file {}", previous.display());
        }
        self.track(key.clone(), path);
        let slot = self.data.entry(key).insert_entry(value).into_mut();
        Ok(&*slot)
    }

    /// [`TreeConfiguration::create`] unless `key` already has an entry
    ///
    /// # Errors
    ///
    /// See [`TreeConfiguration::create`].
    pub fn create_if_absent(&mut self, key: N::Key, value: V, extension: &str) -> Result<&V> {
        if self.data.contains_key(&key) {
            return self
                .data
                .get(&key)
                .ok_or_else(|| Error::KeyNotFound(self.naming.to_name(&key)));
        }
        self.create(key, value, extension)
    }

    /// Remove the entry for `key` and delete its file
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileDelete`] if the file cannot be removed; the
    /// entry is gone from the mapping either way.
    pub fn delete(&mut self, key: &N::Key) -> Result<Option<V>> {
        let Some(value) = self.data.remove(key) else {
            return Ok(None);
        };
        if let Some(path) = self.untrack(key) {
            error::remove_file(&path)?;
            debug!("Deleted entry file {}", path.display());
        }
        Ok(Some(value))
    }

    /// Write `data` to the tracked files and make it the mapping
    ///
    /// Every tracked file must map to a key present in `data` (files that
    /// do not are skipped under `ignore_invalid_files`). Nothing is written
    /// unless all files validate, and the mapping is replaced only after
    /// every write succeeded. Entries of `data` without a tracked file are
    /// kept in memory only.
    ///
    /// # Errors
    ///
    /// Returns a naming or [`Error::KeyNotFound`] error on a file that does
    /// not validate, or an error if serialization or writing fails.
    pub fn save_new_map(&mut self, data: HashMap<N::Key, V>) -> Result<()> {
        let mut planned = Vec::with_capacity(self.files.len());
        for path in &self.files {
            let validated = self.key_for(path).and_then(|key| {
                if data.contains_key(&key) {
                    Ok(key)
                } else {
                    Err(Error::KeyNotFound(self.naming.to_name(&key)))
                }
            });
            match validated {
                Ok(key) => planned.push((key, path.clone())),
                Err(e) if self.ignore_invalid_files => {
                    warn!("Not saving {}: {e}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        for (key, path) in &planned {
            if let Some(value) = data.get(key) {
                error::write_file(path, self.profile.to_string(value)?)?;
            }
        }

        debug!(
            "Saved {} entries to {}",
            planned.len(),
            self.directory.display()
        );
        self.key_files = planned.into_iter().collect();
        self.data = data;
        Ok(())
    }
}

fn read_entry<V: DeserializeOwned>(path: &Path) -> Result<V> {
    JsonReader::new(JsonFile::open(path, false)?).deserialize_as()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::{TempDir, tempdir};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Remote {
        kind: String,
        port: u16,
    }

    fn remote(kind: &str, port: u16) -> Remote {
        Remote {
            kind: kind.into(),
            port,
        }
    }

    fn fixture(files: &[(&str, &str)]) -> TempDir {
        let dir = tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(path, content).unwrap();
        }
        dir
    }

    fn json_tree(dir: &Path) -> TreeConfiguration<StringNamingStrategy, Remote> {
        TreeConfiguration::builder(dir, StringNamingStrategy)
            .restricted_extensions(["json"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_load_maps_each_file_to_its_key() {
        let dir = fixture(&[
            ("a.json", r#"{"kind":"ftp","port":21}"#),
            ("b.json", r#"{"kind":"ssh","port":22}"#),
            ("notes.txt", "not json"),
        ]);
        let mut tree = json_tree(dir.path());

        assert!(!tree.has_data(&"a".to_string()));
        tree.load().unwrap();

        assert!(tree.is_loaded());
        assert_eq!(tree.data().len(), 2);
        assert_eq!(tree.get(&"a".into()), Some(&remote("ftp", 21)));
        assert!(tree.has_data(&"b".to_string()));
    }

    #[test]
    fn test_create_and_delete() {
        let dir = fixture(&[("a.json", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree = json_tree(dir.path());
        tree.load().unwrap();

        tree.create("c".into(), remote("http", 80), "json").unwrap();
        let on_disk: Remote =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("c.json")).unwrap())
                .unwrap();
        assert_eq!(on_disk, remote("http", 80));
        assert_eq!(tree.files().len(), 2);

        let removed = tree.delete(&"c".into()).unwrap();
        assert_eq!(removed, Some(remote("http", 80)));
        assert!(!dir.path().join("c.json").exists());
        assert!(tree.get(&"c".into()).is_none());
        assert_eq!(tree.delete(&"c".into()).unwrap(), None);
    }

    #[test]
    fn test_create_rejects_disallowed_extension() {
        let dir = tempdir().unwrap();
        let mut tree = json_tree(dir.path());

        let err = tree.create("x".into(), remote("ftp", 21), "yml").unwrap_err();

        assert!(matches!(err, Error::InvalidExtension { .. }));
        assert!(tree.get(&"x".into()).is_none());
        assert!(!dir.path().join("x.yml").exists());
    }

    #[test]
    fn test_create_if_absent_keeps_existing() {
        let dir = tempdir().unwrap();
        let mut tree = json_tree(dir.path());

        tree.create("a".into(), remote("ftp", 21), "json").unwrap();
        let kept = tree
            .create_if_absent("a".into(), remote("ssh", 22), "json")
            .unwrap()
            .clone();

        assert_eq!(kept, remote("ftp", 21));
    }

    #[test]
    fn test_invalid_file_fails_load_and_keeps_previous_data() {
        let dir = fixture(&[("a.json", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree = json_tree(dir.path());
        tree.load().unwrap();

        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        tree.refresh_files().unwrap();

        assert!(tree.load().is_err());
        assert_eq!(tree.data().len(), 1);
        assert!(tree.has_data(&"a".to_string()));
    }

    #[test]
    fn test_ignore_invalid_files_skips_bad_entries() {
        let dir = fixture(&[
            ("a.json", r#"{"kind":"ftp","port":21}"#),
            ("b.json", r#"{"kind":"ssh","port":22}"#),
            ("broken.json", r#"{"kind":"ssh","port":"not a port"}"#),
        ]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .ignore_invalid_files(true)
                .build()
                .unwrap();

        assert_eq!(tree.load().unwrap().len(), 2);
    }

    #[test]
    fn test_same_key_in_two_files_collides() {
        let dir = fixture(&[
            ("a.json", r#"{"kind":"ftp","port":21}"#),
            ("a.txt", r#"{"kind":"ssh","port":22}"#),
        ]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .ignore_invalid_files(true)
                .build()
                .unwrap();

        let err = tree.load().unwrap_err();

        assert!(matches!(err, Error::NamingCollision { .. }));
        assert!(!tree.is_loaded());
    }

    #[test]
    fn test_exclude_keeps_file() {
        let dir = fixture(&[("a.json", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree = json_tree(dir.path());
        tree.load().unwrap();

        let excluded = tree.exclude(&"a".into());

        assert_eq!(excluded, Some(dir.path().join("a.json")));
        assert!(dir.path().join("a.json").exists());
        assert!(tree.files().is_empty());
        assert!(tree.exclude(&"a".into()).is_none());
    }

    #[test]
    fn test_save_new_map_validates_before_writing() {
        let dir = fixture(&[
            ("a.json", r#"{"kind":"ftp","port":21}"#),
            ("b.json", r#"{"kind":"ssh","port":22}"#),
        ]);
        let mut tree = json_tree(dir.path());
        tree.load().unwrap();

        let partial = HashMap::from([("a".to_string(), remote("sftp", 2222))]);
        let err = tree.save_new_map(partial).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tree.get(&"a".into()), Some(&remote("ftp", 21)));
        assert!(
            std::fs::read_to_string(dir.path().join("a.json"))
                .unwrap()
                .contains("ftp")
        );

        let full = HashMap::from([
            ("a".to_string(), remote("sftp", 2222)),
            ("b".to_string(), remote("scp", 22)),
        ]);
        tree.save_new_map(full).unwrap();
        tree.load().unwrap();
        assert_eq!(tree.get(&"a".into()), Some(&remote("sftp", 2222)));
    }

    #[test]
    fn test_builder_validation() {
        let dir = tempdir().unwrap();

        let empty = TreeConfiguration::<StringNamingStrategy, Remote>::builder(
            dir.path(),
            StringNamingStrategy,
        )
        .restricted_extensions(Vec::<String>::new())
        .build();
        assert!(matches!(empty, Err(Error::Config(_))));

        let file = dir.path().join("plain.json");
        std::fs::write(&file, "{}").unwrap();
        let not_dir =
            TreeConfiguration::<StringNamingStrategy, Remote>::builder(&file, StringNamingStrategy)
                .build();
        assert!(matches!(not_dir, Err(Error::Config(_))));
    }

    #[test]
    fn test_save_new_map_skips_missing_keys_when_ignoring() {
        let untouched = r#"{"kind":"ssh","port":22}"#;
        let dir = fixture(&[
            ("a.json", r#"{"kind":"ftp","port":21}"#),
            ("b.json", r#"{"kind":"ftp","port":2121}"#),
            ("c.json", untouched),
        ]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .ignore_invalid_files(true)
                .build()
                .unwrap();
        tree.load().unwrap();

        let replacement = HashMap::from([
            ("a".to_string(), remote("sftp", 2222)),
            ("b".to_string(), remote("scp", 22)),
        ]);
        tree.save_new_map(replacement).unwrap();

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert!(read("a.json").contains("sftp"));
        assert!(read("b.json").contains("scp"));
        assert_eq!(read("c.json"), untouched);
        assert_eq!(tree.data().len(), 2);
    }

    #[test]
    fn test_delete_entry_from_initial_data_removes_its_file() {
        let dir = fixture(&[("a.json", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .data(HashMap::from([("a".to_string(), remote("ftp", 21))]))
                .build()
                .unwrap();

        assert_eq!(tree.delete(&"a".into()).unwrap(), Some(remote("ftp", 21)));

        assert!(!dir.path().join("a.json").exists());
        assert!(tree.files().is_empty());
        assert!(tree.load().unwrap().is_empty());
    }

    #[test]
    fn test_exclude_entry_from_initial_data_stops_tracking() {
        let dir = fixture(&[("a.json", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .data(HashMap::from([("a".to_string(), remote("ftp", 21))]))
                .build()
                .unwrap();

        assert_eq!(tree.exclude(&"a".into()), Some(dir.path().join("a.json")));

        assert!(dir.path().join("a.json").exists());
        assert!(tree.files().is_empty());
    }

    #[test]
    fn test_create_with_other_extension_replaces_previous_file() {
        let dir = fixture(&[("a.txt", r#"{"kind":"ftp","port":21}"#)]);
        let mut tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .build()
                .unwrap();
        tree.load().unwrap();

        tree.create("a".into(), remote("ssh", 22), "json").unwrap();

        assert!(!dir.path().join("a.txt").exists());
        assert_eq!(tree.files(), &[dir.path().join("a.json")]);
        tree.load().unwrap();
        assert_eq!(tree.get(&"a".into()), Some(&remote("ssh", 22)));

        tree.delete(&"a".into()).unwrap();
        assert!(tree.files().is_empty());
        assert!(!dir.path().join("a.json").exists());
    }

    #[test]
    fn test_as_builder_round_trips_settings() {
        let dir = tempdir().unwrap();
        let tree: TreeConfiguration<StringNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), StringNamingStrategy)
                .exclusion_prefixes(["_"])
                .restricted_extensions(["json"])
                .build()
                .unwrap();

        let copy: TreeConfiguration<StringNamingStrategy, Remote> =
            tree.as_builder().build().unwrap();

        assert!(copy.is_exclusion_prefix("_"));
        assert!(copy.is_extension_allowed("json"));
        assert!(!copy.is_extension_allowed("toml"));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_keys_and_unparseable_names() {
        let id = uuid::Uuid::new_v4();
        let name = format!("{id}.json");
        let dir = fixture(&[
            (name.as_str(), r#"{"kind":"ftp","port":21}"#),
            ("readme.json", r#"{"kind":"none","port":0}"#),
        ]);

        let mut strict: TreeConfiguration<UuidNamingStrategy, Remote> =
            TreeConfiguration::builder(dir.path(), UuidNamingStrategy)
                .build()
                .unwrap();
        assert_eq!(strict.load().unwrap_err().kind(), ErrorKind::Naming);

        let mut lenient = strict.as_builder().ignore_invalid_files(true).build().unwrap();
        lenient.load().unwrap();
        assert_eq!(lenient.get(&id), Some(&remote("ftp", 21)));
    }
}
