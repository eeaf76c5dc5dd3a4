//! Full-rebuild projections of dashboard collections.

use super::{DocId, Document};
use crate::model::dashboard::{BoardNote, BoardTask, Priority};
use crate::render::TaskCounts;

/// One displayed note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: DocId,
    pub title: String,
    /// Stored line-break form; editing converts to newlines.
    pub content: String,
    pub category: String,
    pub date_ms: i64,
}

/// View state for the dashboard notes grid.
///
/// Rebuilt wholesale from each store snapshot; never patched.
#[derive(Debug, Default)]
pub struct NotesView {
    cards: Vec<NoteCard>,
}

impl NotesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears and rebuilds one card per document, in the given order.
    pub fn render(&mut self, docs: &[Document<BoardNote>]) {
        self.cards.clear();
        for doc in docs {
            self.cards.push(NoteCard {
                id: doc.id,
                title: doc.data.title.clone(),
                content: doc.data.content.clone(),
                category: doc.data.category.clone(),
                date_ms: doc.data.date_ms,
            });
        }
    }

    pub fn cards(&self) -> &[NoteCard] {
        &self.cards
    }

    /// Drives the empty-state message.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// One displayed task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: DocId,
    pub description: String,
    pub priority: Priority,
    pub deadline_ms: Option<i64>,
    pub completed: bool,
}

/// View state for the dashboard task list with its derived counts.
#[derive(Debug, Default)]
pub struct TasksView {
    rows: Vec<TaskRow>,
    counts: TaskCounts,
}

impl TasksView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears and rebuilds one row per document, recomputing both counts
    /// from scratch.
    pub fn render(&mut self, docs: &[Document<BoardTask>]) {
        self.rows.clear();
        for doc in docs {
            self.rows.push(TaskRow {
                id: doc.id,
                description: doc.data.description.clone(),
                priority: doc.data.priority,
                deadline_ms: doc.data.deadline_ms,
                completed: doc.data.completed,
            });
        }
        self.counts = TaskCounts {
            completed: docs.iter().filter(|doc| doc.data.completed).count(),
            total: docs.len(),
        };
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn counts(&self) -> TaskCounts {
        self.counts
    }
}
