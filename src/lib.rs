//! Todopad - a todo-list state engine with key-value persistence
//!
//! This library provides an in-memory todo list with add, remove, edit,
//! toggle and filter operations, mirrored as JSON into a synchronous
//! key-value store. The presentation layer is left to the host; it drives
//! the engine through [`app::TodoApp`] and the [`actions::Action`] enum.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`store`] - The todo list state engine
//! * [`storage`] - Key-value persistence backends
//! * [`logger`] - Diagnostic sink and file logging
//! * [`app`] - Session controller wiring input, store and persistence

/// User-facing actions and key mapping
pub mod actions;

/// Session controller owning the store and input buffers
pub mod app;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for diagnostics and error tracking
pub mod logger;

/// Key-value persistence layer
pub mod storage;

/// Todo list state engine
pub mod store;

/// Todo item data model
pub mod todo;

pub use store::TodoStore;
pub use todo::{priority_label, Filter, Priority, TodoItem};
