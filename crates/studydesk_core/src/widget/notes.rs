//! Sidebar notes widget.

use super::{DeletePrompt, ListWidget, NOTES_KEY};
use crate::model::entry::{EntryId, Note};
use crate::render::{ActionBinding, ListAction, ListKind, ListView};
use crate::store::KvStore;

/// Notes list widget over local durable storage.
pub struct NotesWidget<K: KvStore, P: DeletePrompt> {
    inner: ListWidget<K, Note, P>,
}

impl<K: KvStore, P: DeletePrompt> NotesWidget<K, P> {
    pub fn new(kv: K, prompt: P) -> Self {
        Self {
            inner: ListWidget::new(kv, NOTES_KEY, ListKind::Notes, prompt),
        }
    }

    /// Loads and renders the persisted notes.
    pub fn refresh(&mut self) {
        self.inner.refresh();
    }

    /// Appends a note; blank input is a no-op.
    pub fn add(&mut self, text: &str) {
        self.inner.add_text(text);
    }

    /// Deletes a note after confirmation; unknown ids are no-ops.
    pub fn delete(&mut self, id: EntryId) {
        self.inner.delete(id);
    }

    /// Routes a render-time action binding back into the controller.
    pub fn dispatch(&mut self, binding: ActionBinding) {
        match binding.action {
            ListAction::Delete => self.inner.delete(binding.entry),
            ListAction::ToggleCompleted => self.inner.warn_unsupported("toggle_completed"),
        }
    }

    pub fn view(&self) -> &ListView {
        self.inner.view()
    }
}
