//! Key/value storage abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs this with `window.localStorage`; tests and SSR use
//! [`MemoryStore`]. Values are opaque strings; callers own serialization.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ToolkitError;

/// Minimal string key/value store.
///
/// Methods take `&self`: every implementation is single-threaded and uses
/// interior mutability, matching the browser storage object it stands in for.
pub trait KeyValueStore {
    /// Read the raw value at `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, ToolkitError>;
    /// Replace the value at `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ToolkitError>;
    /// Delete `key`. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), ToolkitError>;
}

/// Read and deserialize a JSON value stored at `key`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, ToolkitError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it at `key`.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), ToolkitError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToolkitError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ToolkitError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ToolkitError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
