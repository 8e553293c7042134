//! # jfig - JSON files, readers and configurations
//!
//! A small layer over `serde_json` for programs that keep their state in
//! JSON files: file handles that always hold parseable JSON, readers and
//! cached writers, and configuration objects built on them.
//!
//! ## Features
//!
//! - **Files**: [`JsonFile`] creates missing files and initializes blank ones to `{}`
//! - **Reading and Writing**: [`JsonReader`] and the cached [`JsonWriter`]
//! - **Typed Access**: [`JsonAccess`] getters over any JSON object
//! - **Direct Configuration**: key/value access to a single file
//! - **Tree Configuration**: one typed entry per file in a directory
//! - **Bound Configurations**: application values kept in sync with JSON
//!   ([`SelectableConfiguration`], [`ConfigurationPack`])
//! - **Output Profiles**: [`CodecProfile`] selects pretty printing and null handling
//! - **HTTP**: `JsonUrlReader` fetches JSON over HTTP (requires the `http` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jfig::{DirectConfiguration, JsonAccess, JsonFile};
//!
//! # fn main() -> jfig::Result<()> {
//! let mut config = DirectConfiguration::new(JsonFile::new("~/.config/my-app/config.json")?)?;
//!
//! config.set("ui.theme", &"dark")?;
//! config.set("ui.font_size", &14)?;
//! config.save()?;
//!
//! assert_eq!(config.get_i32("ui.font_size")?, 14);
//! # Ok(())
//! # }
//! ```
//!
//! ## Tree Configuration
//!
//! ```rust,no_run
//! use jfig::{StringNamingStrategy, TreeConfiguration};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Remote {
//!     kind: String,
//! }
//!
//! # fn main() -> jfig::Result<()> {
//! let mut remotes: TreeConfiguration<StringNamingStrategy, Remote> =
//!     TreeConfiguration::builder("~/.config/my-app/remotes", StringNamingStrategy)
//!         .restricted_extensions(["json"])
//!         .build()?;
//!
//! remotes.load()?;
//! // Writes remotes/gdrive.json
//! remotes.create("gdrive".into(), Remote { kind: "drive".into() }, "json")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Binding Values
//!
//! ```rust,no_run
//! use jfig::{JsonFile, SelectableConfiguration, SelectionHolder};
//!
//! # fn main() -> jfig::Result<()> {
//! let volume = SelectionHolder::new(50u8);
//!
//! let mut audio = SelectableConfiguration::open(JsonFile::new("audio.json")?)?;
//! audio.register("audio", "volume", volume.clone());
//! audio.associate()?; // volume now holds the stored value, if any
//!
//! volume.set(80);
//! audio.save()?;
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod sync;

// Grouped modules
pub mod config;
pub mod json;
pub mod utils;

// Re-exports from core
pub use codec::CodecProfile;
pub use error::{Error, ErrorKind, Result};

// Re-exports from json
#[cfg(feature = "http")]
pub use json::JsonUrlReader;
pub use json::{
    JsonAccess, JsonFile, JsonReader, JsonResponse, JsonWriter, Lockable, Refreshable,
};

// Re-exports from config
#[cfg(feature = "uuid")]
pub use config::UuidNamingStrategy;
pub use config::{
    ConfigurationPack, DirectConfiguration, NamingStrategy, SelectKey, Selectable,
    SelectableConfiguration, SelectionHolder, StringNamingStrategy, TreeConfiguration,
    TreeConfigurationBuilder, TreeFileFilter,
};

pub use utils::JsonBuilder;
