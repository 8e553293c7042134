//! Configurations built on top of the file layer
//!
//! - [`DirectConfiguration`] - typed key/value access to one file
//! - [`TreeConfiguration`] - one typed entry per file in a directory
//! - [`SelectableConfiguration`] - members of one file bound to application values
//! - [`ConfigurationPack`] - application values bound to one file each

mod binding;
mod direct;
mod pack;
mod select;
pub mod tree;

pub use binding::{Selectable, SelectionHolder};
pub use direct::DirectConfiguration;
pub use pack::ConfigurationPack;
pub use select::{SelectKey, SelectableConfiguration};
#[cfg(feature = "uuid")]
pub use tree::UuidNamingStrategy;
pub use tree::{
    NamingStrategy, StringNamingStrategy, TreeConfiguration, TreeConfigurationBuilder,
    TreeFileFilter,
};
