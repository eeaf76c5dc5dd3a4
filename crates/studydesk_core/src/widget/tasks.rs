//! Sidebar tasks widget.

use super::{DeletePrompt, ListWidget, TASKS_KEY};
use crate::model::entry::{EntryId, Task};
use crate::render::{ActionBinding, ListAction, ListKind, ListView, TaskCounts};
use crate::store::KvStore;

/// Tasks list widget over local durable storage.
///
/// Extends the generic list controller with completion toggling and the
/// derived completed/total counts.
pub struct TasksWidget<K: KvStore, P: DeletePrompt> {
    inner: ListWidget<K, Task, P>,
}

impl<K: KvStore, P: DeletePrompt> TasksWidget<K, P> {
    pub fn new(kv: K, prompt: P) -> Self {
        Self {
            inner: ListWidget::new(kv, TASKS_KEY, ListKind::Tasks, prompt),
        }
    }

    /// Loads and renders the persisted tasks.
    pub fn refresh(&mut self) {
        self.inner.refresh();
    }

    /// Appends an open task; blank input is a no-op.
    pub fn add(&mut self, text: &str) {
        self.inner.add_text(text);
    }

    /// Deletes a task after confirmation; unknown ids are no-ops.
    pub fn delete(&mut self, id: EntryId) {
        self.inner.delete(id);
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Applying twice restores the original state. Unknown ids are no-ops.
    pub fn toggle_completed(&mut self, id: EntryId) {
        self.inner.update_entry(id, Task::toggle);
    }

    /// Routes a render-time action binding back into the controller.
    pub fn dispatch(&mut self, binding: ActionBinding) {
        match binding.action {
            ListAction::Delete => self.inner.delete(binding.entry),
            ListAction::ToggleCompleted => self.toggle_completed(binding.entry),
        }
    }

    pub fn view(&self) -> &ListView {
        self.inner.view()
    }

    /// Derived counts from the last render.
    pub fn counts(&self) -> TaskCounts {
        self.inner.view().counts().unwrap_or_default()
    }
}
