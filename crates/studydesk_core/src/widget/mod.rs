//! Sidebar widget controllers.
//!
//! # Responsibility
//! - Orchestrate the load → mutate → save → render transaction for every
//!   user-triggered list operation.
//! - Own all per-widget state explicitly; no module-level globals.
//!
//! # Invariants
//! - Every operation reloads the full list at invocation time; rendered
//!   snapshots are never trusted as current state.
//! - Render runs immediately after each successful store mutation and never
//!   after a failed one.
//! - No operation surfaces an error to the caller; failures degrade to
//!   logged no-ops.

mod list_widget;
mod notes;
mod tasks;

pub use list_widget::ListWidget;
pub use notes::NotesWidget;
pub use tasks::TasksWidget;

/// Storage key for the sidebar notes list.
pub const NOTES_KEY: &str = "sidebar.notes";
/// Storage key for the sidebar tasks list.
pub const TASKS_KEY: &str = "sidebar.tasks";

/// Confirmation step guarding destructive operations.
///
/// Deleting is the only operation that can lose data, so it is the only one
/// gated on an explicit user decision.
pub trait DeletePrompt {
    /// Returns `true` when the user confirms deleting the labeled entry.
    fn confirm_delete(&self, label: &str) -> bool;
}

/// Prompt that always confirms. For tests and scripted flows.
pub struct AutoConfirm;

impl DeletePrompt for AutoConfirm {
    fn confirm_delete(&self, _label: &str) -> bool {
        true
    }
}
