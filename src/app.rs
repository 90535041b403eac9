//! Session controller.
//!
//! [`TodoApp`] is constructed once per session. It hydrates the store, holds
//! the new-item input buffers, maps key events to [`Action`]s and saves the
//! list after every action that changes it.

use crate::actions::Action;
use crate::config::Config;
use crate::constants::LOG_SAVE_FAILED;
use crate::logger::Logger;
use crate::storage::{open_storage, KeyValueStore, StorageError};
use crate::store::TodoStore;
use crate::todo::Priority;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

pub struct TodoApp<S: KeyValueStore> {
    pub store: TodoStore<S>,
    pub new_todo_text: String,
    pub new_todo_priority: Priority,
    default_priority: Priority,
    logger: Logger,
}

impl TodoApp<Box<dyn KeyValueStore>> {
    /// Build a session from configuration, opening the configured backend.
    pub fn from_config(config: &Config, logger: Logger) -> Result<Self, StorageError> {
        let storage = open_storage(&config.storage)?;
        let mut app = Self::new(storage, logger);
        app.default_priority = config.defaults.priority;
        app.new_todo_priority = config.defaults.priority;
        app.store.set_filter(config.defaults.filter);
        Ok(app)
    }
}

impl<S: KeyValueStore> TodoApp<S> {
    /// Create a session and hydrate the store from `storage`.
    pub fn new(storage: S, logger: Logger) -> Self {
        let mut store = TodoStore::new(storage, logger.clone());
        store.load();
        Self {
            store,
            new_todo_text: String::new(),
            new_todo_priority: Priority::default(),
            default_priority: Priority::default(),
            logger,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a key event to an action for the current mode.
    pub fn handle_key(&self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter => match self.store.editing_id() {
                Some(id) => Action::UpdateTodo(id),
                None => Action::AddTodo,
            },
            KeyCode::Esc if self.store.is_editing() => Action::CancelEdit,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }

    /// Apply an action, saving afterwards if the list may have changed.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?}", action);
        let persist = action.mutates_items();

        match action {
            Action::AddTodo => self.submit_new_todo(),
            Action::DeleteTodo(id) => self.store.delete(id),
            Action::ToggleComplete(id) => self.store.toggle_complete(id),
            Action::SetPriority(id, priority) => self.store.set_priority(id, priority),
            Action::ClearCompleted => {
                let removed = self.store.clear_completed();
                debug!("Cleared {} completed todos", removed);
            }
            Action::StartEdit(id) => {
                self.store.edit_by_id(id);
            }
            Action::UpdateTodo(id) => self.store.update_todo(id),
            Action::CancelEdit => self.store.cancel_edit(),
            Action::SetFilter(filter) => self.store.set_filter(filter),
            Action::InputChar(c) => match self.store.editing_text_mut() {
                Some(draft) => draft.push(c),
                None => self.new_todo_text.push(c),
            },
            Action::InputBackspace => match self.store.editing_text_mut() {
                Some(draft) => {
                    draft.pop();
                }
                None => {
                    self.new_todo_text.pop();
                }
            },
            Action::None => {}
        }

        if persist {
            self.persist();
        }
    }

    /// Handle a key event end to end.
    pub fn on_key(&mut self, key: KeyEvent) {
        let action = self.handle_key(key);
        self.dispatch(action);
    }

    fn submit_new_todo(&mut self) {
        if self
            .store
            .add(&self.new_todo_text, Some(self.new_todo_priority))
            .is_some()
        {
            self.new_todo_text.clear();
            self.new_todo_priority = self.default_priority;
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save() {
            self.logger.error(format!("{}: {}", LOG_SAVE_FAILED, e));
        }
    }
}
