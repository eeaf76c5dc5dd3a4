//! Dashboard notes board widget.
//!
//! # Responsibility
//! - Drive note CRUD against the remote document store.
//! - Own the modal editing state (`editing`) per widget instance.
//! - Normalize note content between its stored `<br>` form and editable
//!   newlines.
//!
//! # Invariants
//! - All operations are identity-gated; unresolved identity is a logged
//!   no-op.
//! - The view renders only from subscription callbacks, never directly from
//!   an operation.

use super::identity::require_user;
use super::{DocId, DocumentStore, IdentityProvider, NotesView};
use crate::clock::Clock;
use crate::model::dashboard::BoardNote;
use crate::widget::DeletePrompt;
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break regex"));

/// Converts editable newlines to the stored line-break form.
pub fn content_to_stored(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Converts stored line breaks back to editable newlines.
pub fn content_to_editable(stored: &str) -> String {
    LINE_BREAK_RE.replace_all(stored, "\n").into_owned()
}

/// Form data for creating or editing a note. `content` uses newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Notes board over a remote document collection.
pub struct NotesBoard<S, I, C, P>
where
    S: DocumentStore<BoardNote>,
    I: IdentityProvider,
    C: Clock,
    P: DeletePrompt,
{
    store: Rc<RefCell<S>>,
    identity: I,
    clock: C,
    prompt: P,
    view: Rc<RefCell<NotesView>>,
    app_id: String,
    editing: Option<DocId>,
}

impl<S, I, C, P> NotesBoard<S, I, C, P>
where
    S: DocumentStore<BoardNote>,
    I: IdentityProvider,
    C: Clock,
    P: DeletePrompt,
{
    pub fn new(store: Rc<RefCell<S>>, identity: I, clock: C, prompt: P, app_id: impl Into<String>) -> Self {
        Self {
            store,
            identity,
            clock,
            prompt,
            view: Rc::new(RefCell::new(NotesView::new())),
            app_id: app_id.into(),
            editing: None,
        }
    }

    /// Subscribes the view to the user's notes collection. The listener
    /// sorts newest-first and rebuilds the view on every snapshot.
    pub fn attach(&self) {
        let Some(user) = require_user(&self.identity, "notes_attach") else {
            return;
        };
        let view = Rc::clone(&self.view);
        self.store.borrow_mut().subscribe(
            &self.collection(&user),
            Box::new(move |docs| {
                let mut sorted = docs.to_vec();
                super::ordering::sort_notes(&mut sorted);
                view.borrow_mut().render(&sorted);
            }),
        );
    }

    /// Saves the draft: updates the note being edited, or adds a new one.
    ///
    /// The stored date is restamped on every save, so edited notes move to
    /// the top of the list. Blank titles are rejected no-ops.
    pub fn submit(&mut self, draft: NoteDraft) {
        let Some(user) = require_user(&self.identity, "notes_submit") else {
            return;
        };

        let title = draft.title.trim();
        if title.is_empty() {
            debug!("event=notes_submit module=dashboard status=rejected reason=blank_title");
            return;
        }

        let data = BoardNote {
            title: title.to_string(),
            content: content_to_stored(draft.content.trim()),
            category: draft.category,
            date_ms: self.clock.now_ms(),
        };

        let collection = self.collection(&user);
        match self.editing.take() {
            Some(id) => {
                let result = self
                    .store
                    .borrow_mut()
                    .update(&collection, id, &|note| *note = data.clone());
                if let Err(err) = result {
                    error!("event=notes_submit module=dashboard status=error id={id} error={err}");
                }
            }
            None => {
                if let Err(err) = self.store.borrow_mut().add(&collection, data) {
                    error!("event=notes_submit module=dashboard status=error error={err}");
                }
            }
        }
    }

    /// Opens the note in the editing state and returns its draft form with
    /// editable newlines. Unknown ids return `None` and change nothing.
    pub fn begin_edit(&mut self, id: DocId) -> Option<NoteDraft> {
        let card = self
            .view
            .borrow()
            .cards()
            .iter()
            .find(|card| card.id == id)
            .cloned()?;
        self.editing = Some(id);
        Some(NoteDraft {
            title: card.title,
            content: content_to_editable(&card.content),
            category: card.category,
        })
    }

    /// Drops the editing state without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Id of the note currently being edited, if any.
    pub fn editing(&self) -> Option<DocId> {
        self.editing
    }

    /// Deletes a note after confirmation.
    pub fn delete(&mut self, id: DocId) {
        let Some(user) = require_user(&self.identity, "notes_delete") else {
            return;
        };

        let label = self
            .view
            .borrow()
            .cards()
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.title.clone())
            .unwrap_or_else(|| id.to_string());
        if !self.prompt.confirm_delete(&label) {
            debug!("event=notes_delete module=dashboard status=noop reason=declined id={id}");
            return;
        }

        if let Err(err) = self.store.borrow_mut().remove(&self.collection(&user), id) {
            error!("event=notes_delete module=dashboard status=error id={id} error={err}");
        }
    }

    pub fn view(&self) -> Ref<'_, NotesView> {
        self.view.borrow()
    }

    fn collection(&self, user: &str) -> String {
        format!("artifacts/{}/users/{user}/notes", self.app_id)
    }
}
