use todopad::logger::Logger;
use todopad::storage::{FileStorage, KeyValueStore};
use todopad::{Priority, TodoStore};

#[test]
fn test_file_storage_missing_key() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();
    assert_eq!(storage.get_item("todos").unwrap(), None);
}

#[test]
fn test_file_storage_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path()).unwrap();
    storage.set_item("todos", "[]").unwrap();
    storage.set_item("todos", "[{}]").unwrap();

    assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("[{}]"));
    assert!(!dir.path().join("todos.tmp").exists());
}

#[test]
fn test_file_storage_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path()).unwrap();
    assert!(storage.set_item("../escape", "x").is_err());
    assert!(storage.get_item("").is_err());
}

#[test]
fn test_file_storage_remove_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path()).unwrap();
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();

    storage.remove_item("a").unwrap();
    storage.remove_item("a").unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);

    storage.clear().unwrap();
    assert_eq!(storage.get_item("b").unwrap(), None);
}

#[test]
fn test_file_storage_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TodoStore::new(FileStorage::new(dir.path()).unwrap(), Logger::new());
    store.add("persisted", Some(Priority::Low));
    store.save().unwrap();

    let mut reopened = TodoStore::new(FileStorage::new(dir.path()).unwrap(), Logger::new());
    reopened.load();
    assert_eq!(reopened.items().len(), 1);
    assert_eq!(reopened.items()[0].text, "persisted");
    assert_eq!(reopened.items()[0].priority, Priority::Low);
}

#[test]
fn test_file_storage_failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path()).unwrap();

    // A non-empty directory where the value file belongs makes the rename fail.
    let blocker = dir.path().join("todos.json");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), "x").unwrap();

    assert!(storage.set_item("todos", "[]").is_err());
    assert!(!dir.path().join("todos.tmp").exists());
}
