//! Full-rebuild list view.

use crate::model::entry::{EntryId, ListEntry};

/// Per-item action a rendered control can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Delete,
    ToggleCompleted,
}

/// Action handle wired to one rendered item.
///
/// Bindings are freshly built on every render and carry the entry's stable
/// id; a binding kept across renders still resolves, and one whose entry has
/// vanished dispatches to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    pub entry: EntryId,
    pub action: ListAction,
}

/// One displayed list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub entry: EntryId,
    pub label: String,
    /// `Some` for task rows, `None` for note rows.
    pub completed: Option<bool>,
    pub actions: Vec<ActionBinding>,
}

/// Derived counts shown next to a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub completed: usize,
    pub total: usize,
}

/// Which widget family the view renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Notes,
    Tasks,
}

/// View state for one sidebar list.
///
/// Holds whatever the last `render` produced; there is no diffing and no
/// dirty state. The persisted sequence and `items()` are in 1:1
/// order-preserving correspondence after every widget operation.
#[derive(Debug)]
pub struct ListView {
    kind: ListKind,
    items: Vec<RenderedItem>,
    counts: Option<TaskCounts>,
}

impl ListView {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            counts: match kind {
                ListKind::Notes => None,
                ListKind::Tasks => Some(TaskCounts::default()),
            },
        }
    }

    /// Rebuilds the view from the current list.
    ///
    /// Clears all previously rendered items, constructs one item per
    /// element in order, and recomputes derived counts from scratch.
    pub fn render<T: ListEntry>(&mut self, list: &[T]) {
        self.items.clear();
        for entry in list {
            let id = entry.id();
            let mut actions = vec![ActionBinding {
                entry: id,
                action: ListAction::Delete,
            }];
            if self.kind == ListKind::Tasks {
                actions.push(ActionBinding {
                    entry: id,
                    action: ListAction::ToggleCompleted,
                });
            }
            self.items.push(RenderedItem {
                entry: id,
                label: entry.label().to_string(),
                completed: entry.completed(),
                actions,
            });
        }

        if self.kind == ListKind::Tasks {
            self.counts = Some(TaskCounts {
                completed: list
                    .iter()
                    .filter(|entry| entry.completed() == Some(true))
                    .count(),
                total: list.len(),
            });
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    /// Derived counts; `None` for note views.
    pub fn counts(&self) -> Option<TaskCounts> {
        self.counts
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
