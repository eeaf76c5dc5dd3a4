//! Dashboard widget family over a remote document store.
//!
//! # Responsibility
//! - Define the listener-based document store contract and a reference
//!   in-memory implementation.
//! - Provide the notes and tasks board widgets, identity gating, and the
//!   deterministic ordering rules applied before every render.
//!
//! # Invariants
//! - Rendering is push-based: views are rebuilt exclusively from store
//!   change notifications, so out-of-band updates from other sessions on
//!   the same store re-render without widget involvement.
//! - Every widget operation is gated on a resolved identity; until then it
//!   logs and returns without mutating.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod document_store;
mod identity;
mod notes_board;
pub mod ordering;
mod tasks_board;
mod view;

pub use document_store::{ChangeListener, DocId, Document, DocumentStore, MemoryDocumentStore};
pub use identity::{IdentityProvider, SessionIdentity, UserId};
pub use notes_board::{content_to_editable, content_to_stored, NoteDraft, NotesBoard};
pub use tasks_board::{TaskDraft, TasksBoard};
pub use view::{NoteCard, NotesView, TaskRow, TasksView};

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error for document store operations.
#[derive(Debug)]
pub enum DashboardError {
    /// Target document does not exist in the collection.
    NotFound(DocId),
    /// Transport/backend failure from a non-memory store implementation.
    Backend(String),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "document not found: {id}"),
            Self::Backend(message) => write!(f, "document store backend error: {message}"),
        }
    }
}

impl Error for DashboardError {}
