//! Todo list state engine.
//!
//! [`TodoStore`] owns the ordered item list, the view filter and the edit-mode
//! draft. All mutation goes through its methods. Missing ids and blank text are
//! silent no-ops rather than errors.

use crate::constants::{LOG_LOADED_TODOS, LOG_LOAD_FAILED, LOG_SAVED_TODOS, STORAGE_KEY};
use crate::logger::Logger;
use crate::storage::{KeyValueStore, StorageError};
use crate::todo::{Filter, Priority, TodoItem};
use log::{debug, warn};

/// Item currently being text-edited and its in-progress draft.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    id: u64,
    text: String,
}

pub struct TodoStore<S: KeyValueStore> {
    items: Vec<TodoItem>,
    filter: Filter,
    editing: Option<EditSession>,
    // None once every id has been handed out.
    next_id: Option<u64>,
    storage: S,
    logger: Logger,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Create an empty store. Call [`TodoStore::load`] to hydrate it.
    pub fn new(storage: S, logger: Logger) -> Self {
        Self {
            items: Vec::new(),
            filter: Filter::default(),
            editing: None,
            next_id: Some(1),
            storage,
            logger,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn editing_id(&self) -> Option<u64> {
        self.editing.as_ref().map(|edit| edit.id)
    }

    /// Draft text of the current edit, empty when not editing.
    pub fn editing_text(&self) -> &str {
        self.editing.as_ref().map(|edit| edit.text.as_str()).unwrap_or("")
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Replace the whole list, as a host assigning the list directly would.
    pub fn replace_items(&mut self, items: Vec<TodoItem>) {
        self.items = items;
        self.bump_next_id();
    }

    /// Append a new item. Returns its id, or `None` if `text` is blank or
    /// the id space is exhausted.
    pub fn add(&mut self, text: &str, priority: Option<Priority>) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let Some(id) = self.next_id else {
            warn!("No todo ids left, ignoring add");
            return None;
        };
        self.next_id = id.checked_add(1);
        self.items
            .push(TodoItem::new(id, text, priority.unwrap_or_default()));
        debug!("Added todo {}", id);
        Some(id)
    }

    pub fn delete(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn toggle_complete(&mut self, id: u64) {
        if let Some(item) = self.find_mut(id) {
            item.completed = !item.completed;
        }
    }

    /// Enter edit mode on `item`, copying its text into the draft.
    pub fn edit_todo(&mut self, item: &TodoItem) {
        self.editing = Some(EditSession {
            id: item.id,
            text: item.text.clone(),
        });
    }

    /// Enter edit mode on the item with `id`. Returns false if there is none.
    pub fn edit_by_id(&mut self, id: u64) -> bool {
        match self.get(id).cloned() {
            Some(item) => {
                self.edit_todo(&item);
                true
            }
            None => false,
        }
    }

    /// Replace the draft text. Ignored outside edit mode.
    pub fn set_editing_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text = text.into();
        }
    }

    /// Mutable access to the draft for character-level editing.
    pub fn editing_text_mut(&mut self) -> Option<&mut String> {
        self.editing.as_mut().map(|edit| &mut edit.text)
    }

    /// Commit the draft to the item with `id` and leave edit mode.
    ///
    /// The draft is applied only when `id` is the item being edited and the
    /// draft is not blank. Edit mode is exited in every case.
    pub fn update_todo(&mut self, id: u64) {
        let Some(edit) = self.editing.take() else {
            return;
        };

        let text = edit.text.trim();
        if edit.id != id || text.is_empty() {
            return;
        }

        if let Some(item) = self.find_mut(id) {
            item.text = text.to_string();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_priority(&mut self, id: u64, priority: Priority) {
        if let Some(item) = self.find_mut(id) {
            item.priority = priority;
        }
    }

    /// Remove every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    /// Items passing the current filter, in list order.
    pub fn filtered_todos(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| self.filter.matches(item)).collect()
    }

    pub fn active_todos_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_todos_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Write the list as JSON under the storage key.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set_item(STORAGE_KEY, &json)?;
        debug!("{} ({} items)", LOG_SAVED_TODOS, self.items.len());
        Ok(())
    }

    /// Replace the list with the persisted one.
    ///
    /// Absent data yields an empty list. Unreadable or malformed data also
    /// yields an empty list and is reported to the logger; nothing is returned
    /// to the caller.
    pub fn load(&mut self) {
        self.items = match self.storage.get_item(STORAGE_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TodoItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    self.logger.error(format!("{}: {}", LOG_LOAD_FAILED, e));
                    Vec::new()
                }
            },
            Err(e) => {
                self.logger.error(format!("{}: {}", LOG_LOAD_FAILED, e));
                Vec::new()
            }
        };
        self.bump_next_id();
        debug!("{} ({} items)", LOG_LOADED_TODOS, self.items.len());
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    // Ids are never reused, so the counter only moves forward.
    fn bump_next_id(&mut self) {
        if let Some(max_id) = self.items.iter().map(|item| item.id).max() {
            self.next_id = match (self.next_id, max_id.checked_add(1)) {
                (Some(next), Some(after_max)) => Some(next.max(after_max)),
                _ => None,
            };
        }
    }
}
