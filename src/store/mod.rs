//! Persistent key/value cells.
//!
//! [`PersistentStore`] keeps typed values in a [`StorageBackend`] as JSON text.
//! Reads never fail: missing, unreadable or malformed entries resolve to the
//! caller's default and are logged. Every consumer reads through the same
//! store, so a write is visible to all of them immediately.

pub mod backend;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Shared handle to durable storage. Cloning is cheap and clones alias the
/// same backend.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn StorageBackend>,
}

impl std::fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

impl PersistentStore {
    /// Wraps a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Creates a store backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Reads the value under `key`, falling back to `default`.
    ///
    /// Malformed data is treated as absent: the error is logged and
    /// `default` returned.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed stored value");
                default
            }
        }
    }

    /// Serializes `value` and stores it under `key`.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .context(format!("Failed to serialize value for '{key}'"))?;
        self.write_raw(key, &raw)
    }

    /// Applies `f` to the current value (or `default`) and stores the result.
    ///
    /// Returns the value that was written.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let next = f(self.read(key, default));
        self.write(key, &next)?;
        Ok(next)
    }

    /// Returns the raw stored text, or `None` if missing or unreadable.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Failed to read from storage, using default");
                None
            }
        }
    }

    /// Stores raw text without interpreting it.
    pub fn write_raw(&self, key: &str, raw: &str) -> Result<()> {
        self.backend
            .set(key, raw)
            .context(format!("Failed to store '{key}'"))
    }

    /// Removes `key` from storage.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend
            .remove(key)
            .context(format!("Failed to remove '{key}'"))
    }
}
