//! Values that configurations read from and write back to JSON

use crate::codec::CodecProfile;
use crate::error::Result;
use crate::sync::RwLockExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock, RwLockReadGuard};

/// A value bound to a JSON location
///
/// Configurations call [`Selectable::snapshot`] when saving and
/// [`Selectable::restore`] when applying what was read from disk. Both take
/// `&self`, so bindings are shared cells rather than exclusively borrowed
/// values.
pub trait Selectable {
    /// Current value as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    fn snapshot(&self, profile: CodecProfile) -> Result<Value>;

    /// Replace the value with one converted from `value`
    ///
    /// # Errors
    ///
    /// Returns an error if `value` does not fit the bound type; the current
    /// value is left untouched.
    fn restore(&self, value: Value) -> Result<()>;
}

/// Cloneable shared cell that can be bound to a configuration
///
/// Clones share the same value, so the application keeps one clone and
/// hands another to the configuration.
///
/// ```
/// use jfig::{CodecProfile, Selectable, SelectionHolder};
///
/// let volume = SelectionHolder::new(5u8);
/// let bound = volume.clone();
///
/// bound.restore(serde_json::json!(9)).unwrap();
/// assert_eq!(volume.get(), 9);
/// assert_eq!(bound.snapshot(CodecProfile::Compact).unwrap(), 9);
/// ```
#[derive(Debug, Default)]
pub struct SelectionHolder<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for SelectionHolder<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SelectionHolder<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Copy of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.read_recovered().clone()
    }

    /// Borrow the current value
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read_recovered()
    }

    /// Replace the current value, returning the previous one
    pub fn set(&self, value: T) -> T {
        std::mem::replace(&mut *self.inner.write_recovered(), value)
    }

    /// Modify the current value in place
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write_recovered())
    }
}

impl<T: Serialize + DeserializeOwned> Selectable for SelectionHolder<T> {
    fn snapshot(&self, profile: CodecProfile) -> Result<Value> {
        profile.to_value(&*self.inner.read_recovered())
    }

    fn restore(&self, value: Value) -> Result<()> {
        let value: T = serde_json::from_value(value)?;
        *self.inner.write_recovered() = value;
        Ok(())
    }
}

/// Binding made of a getter and a setter
pub(crate) struct FnBinding<T, G, S> {
    getter: G,
    setter: S,
    _value: PhantomData<fn(T) -> T>,
}

impl<T, G, S> FnBinding<T, G, S>
where
    G: Fn() -> T,
    S: Fn(T),
{
    pub(crate) fn new(getter: G, setter: S) -> Self {
        Self {
            getter,
            setter,
            _value: PhantomData,
        }
    }
}

impl<T, G, S> Selectable for FnBinding<T, G, S>
where
    T: Serialize + DeserializeOwned,
    G: Fn() -> T,
    S: Fn(T),
{
    fn snapshot(&self, profile: CodecProfile) -> Result<Value> {
        profile.to_value(&(self.getter)())
    }

    fn restore(&self, value: Value) -> Result<()> {
        (self.setter)(serde_json::from_value(value)?);
        Ok(())
    }
}
