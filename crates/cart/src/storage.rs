//! Persistent key-value storage.

use std::{io, sync::Mutex};

use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a [`PersistentStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file or device failed.
    #[error("storage io error")]
    Io(#[from] io::Error),

    /// A writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Key-value string storage that survives across sessions.
#[automock]
pub trait PersistentStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(key.into(), value.into());

        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl PersistentStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_err| StorageError::Poisoned)?;

        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_err| StorageError::Poisoned)?;

        entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
