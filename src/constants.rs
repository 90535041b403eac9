//! Constants used throughout the application
//!
//! This module centralizes storage keys, file names and log message text.

/// Key the todo list is stored under in the key-value store
pub const STORAGE_KEY: &str = "todos";

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "todopad";

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "todopad.toml";

/// Config file looked up in the XDG config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file written when file logging is enabled
pub const LOG_FILE_NAME: &str = "todopad.log";

// Priority labels
pub const LABEL_HIGH: &str = "高";
pub const LABEL_MEDIUM: &str = "中";
pub const LABEL_LOW: &str = "低";

// Log Messages
pub const LOG_LOAD_FAILED: &str = "❌ Failed to load todos from storage";
pub const LOG_SAVE_FAILED: &str = "❌ Failed to save todos to storage";
pub const LOG_LOADED_TODOS: &str = "✅ Loaded todos from storage";
pub const LOG_SAVED_TODOS: &str = "✅ Saved todos to storage";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
