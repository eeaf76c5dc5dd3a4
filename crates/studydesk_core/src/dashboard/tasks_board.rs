//! Dashboard tasks board widget.
//!
//! # Responsibility
//! - Drive task CRUD, quick-add, completion toggling, and clear-completed
//!   against the remote document store.
//! - Own the modal editing state per widget instance.
//!
//! # Invariants
//! - All operations are identity-gated; unresolved identity is a logged
//!   no-op.
//! - The view renders only from subscription callbacks; derived counts come
//!   from the view, never from a running counter.

use super::identity::require_user;
use super::{DocId, DocumentStore, IdentityProvider, TasksView};
use crate::model::dashboard::{BoardTask, Priority};
use crate::render::TaskCounts;
use crate::widget::DeletePrompt;
use log::{debug, error};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Form data for creating or editing a task through the details modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub priority: Priority,
    pub deadline_ms: Option<i64>,
}

/// Tasks board over a remote document collection.
pub struct TasksBoard<S, I, P>
where
    S: DocumentStore<BoardTask>,
    I: IdentityProvider,
    P: DeletePrompt,
{
    store: Rc<RefCell<S>>,
    identity: I,
    prompt: P,
    view: Rc<RefCell<TasksView>>,
    app_id: String,
    editing: Option<DocId>,
}

impl<S, I, P> TasksBoard<S, I, P>
where
    S: DocumentStore<BoardTask>,
    I: IdentityProvider,
    P: DeletePrompt,
{
    pub fn new(store: Rc<RefCell<S>>, identity: I, prompt: P, app_id: impl Into<String>) -> Self {
        Self {
            store,
            identity,
            prompt,
            view: Rc::new(RefCell::new(TasksView::new())),
            app_id: app_id.into(),
            editing: None,
        }
    }

    /// Subscribes the view to the user's tasks collection. The listener
    /// applies the completion/priority/deadline ordering and rebuilds the
    /// view on every snapshot.
    pub fn attach(&self) {
        let Some(user) = require_user(&self.identity, "tasks_attach") else {
            return;
        };
        let view = Rc::clone(&self.view);
        self.store.borrow_mut().subscribe(
            &self.collection(&user),
            Box::new(move |docs| {
                let mut sorted = docs.to_vec();
                super::ordering::sort_tasks(&mut sorted);
                view.borrow_mut().render(&sorted);
            }),
        );
    }

    /// Adds an open task with default priority and no deadline from the
    /// quick-add input. Blank input is a rejected no-op.
    pub fn quick_add(&mut self, description: &str) {
        let Some(user) = require_user(&self.identity, "tasks_quick_add") else {
            return;
        };

        let trimmed = description.trim();
        if trimmed.is_empty() {
            debug!("event=tasks_quick_add module=dashboard status=rejected reason=blank_input");
            return;
        }

        let result = self
            .store
            .borrow_mut()
            .add(&self.collection(&user), BoardTask::quick(trimmed));
        if let Err(err) = result {
            error!("event=tasks_quick_add module=dashboard status=error error={err}");
        }
    }

    /// Saves the modal draft: updates the task being edited, or adds a new
    /// one. A saved draft is always open; editing a completed task reopens
    /// it, matching the details form.
    pub fn submit(&mut self, draft: TaskDraft) {
        let Some(user) = require_user(&self.identity, "tasks_submit") else {
            return;
        };

        let description = draft.description.trim();
        if description.is_empty() {
            debug!("event=tasks_submit module=dashboard status=rejected reason=blank_input");
            return;
        }

        let data = BoardTask {
            description: description.to_string(),
            priority: draft.priority,
            deadline_ms: draft.deadline_ms,
            completed: false,
        };

        let collection = self.collection(&user);
        match self.editing.take() {
            Some(id) => {
                let result = self
                    .store
                    .borrow_mut()
                    .update(&collection, id, &|task| *task = data.clone());
                if let Err(err) = result {
                    error!("event=tasks_submit module=dashboard status=error id={id} error={err}");
                }
            }
            None => {
                if let Err(err) = self.store.borrow_mut().add(&collection, data) {
                    error!("event=tasks_submit module=dashboard status=error error={err}");
                }
            }
        }
    }

    /// Flips the completion flag of one task. Unknown ids log and change
    /// nothing.
    pub fn toggle_completed(&mut self, id: DocId) {
        let Some(user) = require_user(&self.identity, "tasks_toggle") else {
            return;
        };

        let result = self
            .store
            .borrow_mut()
            .update(&self.collection(&user), id, &|task| {
                task.completed = !task.completed;
            });
        if let Err(err) = result {
            error!("event=tasks_toggle module=dashboard status=error id={id} error={err}");
        }
    }

    /// Opens the task in the editing state and returns its draft form.
    pub fn begin_edit(&mut self, id: DocId) -> Option<TaskDraft> {
        let row = self
            .view
            .borrow()
            .rows()
            .iter()
            .find(|row| row.id == id)
            .cloned()?;
        self.editing = Some(id);
        Some(TaskDraft {
            description: row.description,
            priority: row.priority,
            deadline_ms: row.deadline_ms,
        })
    }

    /// Drops the editing state without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Id of the task currently being edited, if any.
    pub fn editing(&self) -> Option<DocId> {
        self.editing
    }

    /// Deletes a task after confirmation.
    pub fn delete(&mut self, id: DocId) {
        let Some(user) = require_user(&self.identity, "tasks_delete") else {
            return;
        };

        let label = self
            .view
            .borrow()
            .rows()
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.description.clone())
            .unwrap_or_else(|| id.to_string());
        if !self.prompt.confirm_delete(&label) {
            debug!("event=tasks_delete module=dashboard status=noop reason=declined id={id}");
            return;
        }

        if let Err(err) = self.store.borrow_mut().remove(&self.collection(&user), id) {
            error!("event=tasks_delete module=dashboard status=error id={id} error={err}");
        }
    }

    /// Removes every completed task from the collection.
    pub fn clear_completed(&mut self) {
        let Some(user) = require_user(&self.identity, "tasks_clear_completed") else {
            return;
        };

        let collection = self.collection(&user);
        let completed = self
            .store
            .borrow()
            .query_where(&collection, &|task| task.completed);
        for doc in completed {
            if let Err(err) = self.store.borrow_mut().remove(&collection, doc.id) {
                error!(
                    "event=tasks_clear_completed module=dashboard status=error id={} error={err}",
                    doc.id
                );
            }
        }
    }

    pub fn view(&self) -> Ref<'_, TasksView> {
        self.view.borrow()
    }

    /// Derived counts from the last rendered snapshot.
    pub fn counts(&self) -> TaskCounts {
        self.view.borrow().counts()
    }

    fn collection(&self, user: &str) -> String {
        format!("artifacts/{}/users/{user}/tasks", self.app_id)
    }
}
