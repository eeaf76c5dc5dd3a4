//! Sidebar list entries.
//!
//! # Responsibility
//! - Define the note and task records held by persisted lists.
//! - Provide the `ListEntry` contract the generic controller and renderer
//!   are written against.
//!
//! # Invariants
//! - `id` is stable for the lifetime of an entry and never reused.
//! - List position is display order only; it carries no identity.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a sidebar list entry.
pub type EntryId = Uuid;

/// Contract shared by every record a sidebar list can hold.
///
/// The controller and renderer only ever see entries through this trait, so
/// notes and tasks share one store/render pipeline.
pub trait ListEntry: Clone + Serialize + DeserializeOwned {
    /// Stable id assigned at creation.
    fn id(&self) -> EntryId;
    /// Text shown for the entry.
    fn label(&self) -> &str;
    /// Completion flag for entries that have one. Notes return `None`.
    fn completed(&self) -> Option<bool> {
        None
    }
    /// Builds a fresh entry from submitted text.
    fn with_text(text: String) -> Self;
}

/// Free-form sidebar note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntryId,
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

impl ListEntry for Note {
    fn id(&self) -> EntryId {
        self.id
    }

    fn label(&self) -> &str {
        &self.text
    }

    fn with_text(text: String) -> Self {
        Self::new(text)
    }
}

/// Actionable sidebar task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates an open task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl ListEntry for Task {
    fn id(&self) -> EntryId {
        self.id
    }

    fn label(&self) -> &str {
        &self.text
    }

    fn completed(&self) -> Option<bool> {
        Some(self.completed)
    }

    fn with_text(text: String) -> Self {
        Self::new(text)
    }
}
