//! Todo item data model.

use crate::constants::{LABEL_HIGH, LABEL_LOW, LABEL_MEDIUM};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Wire name used in persisted JSON and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => LABEL_HIGH,
            Priority::Medium => LABEL_MEDIUM,
            Priority::Low => LABEL_LOW,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// View filter over the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
}

impl TodoItem {
    pub fn new(id: u64, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority,
        }
    }
}

/// Maps a raw priority name to its display label.
///
/// Unrecognized input, including `None` and the empty string, is returned unchanged.
pub fn priority_label(value: Option<&str>) -> Option<&str> {
    value.map(|raw| match raw.parse::<Priority>() {
        Ok(priority) => priority.label(),
        Err(_) => raw,
    })
}
