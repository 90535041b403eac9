use todopad::storage::{KeyValueStore, MemoryStorage};

#[test]
fn test_memory_storage_get_set_remove() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.get_item("todos").unwrap(), None);

    storage.set_item("todos", "[1]").unwrap();
    storage.set_item("todos", "[2]").unwrap();
    assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("[2]"));
    assert_eq!(storage.len(), 1);

    storage.remove_item("todos").unwrap();
    storage.remove_item("todos").unwrap();
    assert!(storage.is_empty());
}

#[test]
fn test_memory_storage_clear() {
    let mut storage = MemoryStorage::new();
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();
    storage.clear().unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);
    assert!(storage.is_empty());
}
