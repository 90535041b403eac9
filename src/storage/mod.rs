//! Key-value persistence layer
//!
//! This module provides the synchronous string key-value contract the todo
//! store persists into, along with two backends:
//! - [`MemoryStorage`] - process-local map, used for tests and ephemeral sessions
//! - [`FileStorage`] - one JSON file per key under a data directory

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::{StorageBackend, StorageConfig};
use std::path::PathBuf;

/// Error types for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value store, modeled on browser local storage.
///
/// Every call completes before returning; a failed write leaves the previous
/// value in place.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;

    /// Removes every key.
    fn clear(&mut self) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// Open the backend selected by configuration.
pub fn open_storage(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>, StorageError> {
    match config.backend {
        StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
        StorageBackend::File => {
            let dir = config.resolved_data_dir().ok_or_else(|| {
                StorageError::Unavailable("could not determine data directory".to_string())
            })?;
            Ok(Box::new(FileStorage::new(dir)?))
        }
    }
}
