use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use log::Level;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared diagnostic sink that can be used across the application.
///
/// Every entry is kept in memory for the host to display and forwarded to the
/// `log` facade, so whatever logger the host installed also receives it.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an info log entry
    pub fn log(&self, message: String) {
        self.record(Level::Info, message);
    }

    /// Add an error log entry
    pub fn error(&self, message: String) {
        self.record(Level::Error, message);
    }

    fn record(&self, level: Level, message: String) {
        log::log!(target: "todopad", level, "{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {} {}", timestamp, level, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push((level, formatted_message));
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().map(|(_, entry)| entry.clone()).collect()
        } else {
            Vec::new()
        }
    }

    /// Number of entries recorded at error level
    pub fn error_count(&self) -> usize {
        self.logs
            .lock()
            .map(|logs| logs.iter().filter(|(level, _)| *level == Level::Error).count())
            .unwrap_or(0)
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Get the log file path
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a `fern` dispatch writing to the default log file when logging is enabled.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init_file_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = Logger::get_log_file_path()?;
    init_file_logging_at(config, &path)
}

/// Same as [`init_file_logging`], writing to `path`.
///
/// The global logger can only be installed once per process.
pub fn init_file_logging_at(config: &LoggingConfig, path: &Path) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let level = config.level_filter()?;
    let log_file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    Ok(Some(path.to_path_buf()))
}
