//! Local key-value storage
//!
//! The [`KeyValueStore`] port abstracts the browser-style local store the
//! booking list persists into: string keys, string values, synchronous calls
//! that may fail on quota or availability. Backends here are SQLite (on disk),
//! an in-memory map, and an always-failing store.

mod memory;
mod migrations;
mod sqlite;
mod unavailable;

use crate::error::{Error, Result};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use unavailable::UnavailableStore;

/// Synchronous string key-value store
pub trait KeyValueStore: Send {
    /// Read a value, `None` if the key was never set or was removed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Check a prospective total size against an optional byte quota
pub(crate) fn check_quota(quota: Option<usize>, needed: usize) -> Result<()> {
    match quota {
        Some(quota) if needed > quota => Err(Error::QuotaExceeded { needed, quota }),
        _ => Ok(()),
    }
}
