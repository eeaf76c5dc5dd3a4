//! Dashboard document records.
//!
//! # Responsibility
//! - Define the note and task documents stored in the remote collection
//!   store behind the dashboard page.
//!
//! # Invariants
//! - Wire names follow the external schema: priority serializes as
//!   `low`/`medium`/`high`.
//! - `date_ms` and `deadline_ms` are Unix epoch milliseconds.

use serde::{Deserialize, Serialize};

/// Task urgency. Ordering for display is `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank, higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl Default for Priority {
    /// Quick-added tasks default to medium urgency.
    fn default() -> Self {
        Self::Medium
    }
}

/// Dashboard note document.
///
/// `content` is persisted in its stored line-break form (`<br>` separators);
/// the notes board converts to and from editable newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardNote {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Stamped on every save, newest-first display order.
    pub date_ms: i64,
}

/// Dashboard task document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTask {
    pub description: String,
    pub priority: Priority,
    /// Optional due date; tasks without one sort after tasks with one.
    pub deadline_ms: Option<i64>,
    pub completed: bool,
}

impl BoardTask {
    /// Builds the quick-add shape: medium priority, no deadline, open.
    pub fn quick(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: Priority::default(),
            deadline_ms: None,
            completed: false,
        }
    }
}
