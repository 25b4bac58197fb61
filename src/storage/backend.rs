//! Durable key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait used to persist client-owned
//! state between runs. Values are opaque strings (callers store JSON), which
//! keeps backends trivial and the persisted format owned by the slice that
//! writes it.

use crate::domain::error::Result;

/// Synchronous string key-value storage.
///
/// Reads happen once at startup; writes are write-through on every persisted
/// state transition.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON document on
///   disk with atomic writes (default)
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}
