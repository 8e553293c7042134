//! Retargeting and reloading capabilities shared by file-backed components

use crate::error::{Error, Result};
use crate::json::JsonFile;

/// A component bound to a [`JsonFile`] that may be repointed at another one
///
/// Components constructed as locked refuse to be repointed. This guards
/// configuration singletons against accidental retargeting.
pub trait Lockable {
    /// Whether [`Lockable::set_file`] is refused
    fn is_locked(&self) -> bool;

    /// The file this component is bound to
    fn file(&self) -> &JsonFile;

    /// Bind to another file and reload from it, discarding unsaved changes
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locked`] if the component is locked, or an error if
    /// loading the new file fails.
    fn set_file(&mut self, file: JsonFile) -> Result<()>;

    /// Fail with [`Error::Locked`] when locked
    ///
    /// # Errors
    ///
    /// Returns [`Error::Locked`] carrying `message` if the component is locked.
    fn check_locked(&self, message: &str) -> Result<()> {
        if self.is_locked() {
            return Err(Error::Locked(message.to_string()));
        }
        Ok(())
    }
}

/// A component whose cached state can be reloaded from its source
pub trait Refreshable {
    /// Reload cached state, discarding unsaved changes
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn refresh(&mut self) -> Result<()>;
}
