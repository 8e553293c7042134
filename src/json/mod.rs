//! File handles, readers and writers
//!
//! - [`JsonFile`] - a path guaranteed to hold parseable JSON
//! - [`JsonReader`] - parses a file into a value tree or typed shape
//! - [`JsonWriter`] - cached read-modify-write access to a file
//! - [`JsonAccess`] - typed getters shared by every object-backed component
//! - [`JsonResponse`] / `JsonUrlReader` - JSON from outside the filesystem

mod access;
mod capability;
mod file;
mod reader;
mod response;
#[cfg(feature = "http")]
mod url;
mod writer;

pub use access::JsonAccess;
pub use capability::{Lockable, Refreshable};
pub use file::JsonFile;
pub(crate) use file::expand_home;
pub use reader::JsonReader;
pub use response::JsonResponse;
#[cfg(feature = "http")]
pub use url::JsonUrlReader;
pub use writer::JsonWriter;
