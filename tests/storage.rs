#[path = "storage/memory.rs"]
mod memory;

#[path = "storage/file.rs"]
mod file;

use todopad::config::{StorageBackend, StorageConfig};
use todopad::storage::{open_storage, KeyValueStore};

#[test]
fn test_open_memory_storage() {
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        data_dir: None,
    };
    let mut storage = open_storage(&config).unwrap();
    storage.set_item("todos", "[]").unwrap();
    assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_open_file_storage_in_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::File,
        data_dir: Some(dir.path().join("data")),
    };
    let mut storage = open_storage(&config).unwrap();
    storage.set_item("todos", "[]").unwrap();
    assert!(dir.path().join("data").join("todos.json").exists());
}
