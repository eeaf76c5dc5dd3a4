//! Generic list controller shared by the notes and tasks widgets.

use super::DeletePrompt;
use crate::model::entry::{EntryId, ListEntry};
use crate::render::{ListKind, ListView};
use crate::store::{KvStore, ListStore};
use log::{debug, error, warn};

/// Controller running the load → mutate → save → render cycle for one list.
///
/// Holds the store handle, the confirmation prompt, and the rendered view.
/// Widget-specific operations (task toggling) are layered on top by the
/// concrete widget types.
pub struct ListWidget<K: KvStore, T: ListEntry, P: DeletePrompt> {
    store: ListStore<K, T>,
    prompt: P,
    view: ListView,
}

impl<K: KvStore, T: ListEntry, P: DeletePrompt> ListWidget<K, T, P> {
    pub fn new(kv: K, key: &str, kind: ListKind, prompt: P) -> Self {
        Self {
            store: ListStore::new(kv, key),
            prompt,
            view: ListView::new(kind),
        }
    }

    /// Loads the persisted list and renders it without mutating. Initial
    /// display path.
    pub fn refresh(&mut self) {
        let list = self.store.load();
        self.view.render(&list);
    }

    /// Appends a new entry built from `text`.
    ///
    /// Empty or whitespace-only input is rejected as a logged no-op.
    pub fn add_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!(
                "event=list_add module=widget status=rejected key={} reason=blank_input",
                self.store.key()
            );
            return;
        }

        let mut list = self.store.load();
        list.push(T::with_text(trimmed.to_string()));
        self.commit(&list);
    }

    /// Removes the entry with the given id after user confirmation.
    ///
    /// Unknown ids and declined confirmations are no-ops.
    pub fn delete(&mut self, id: EntryId) {
        let mut list = self.store.load();
        let Some(position) = list.iter().position(|entry| entry.id() == id) else {
            debug!(
                "event=list_delete module=widget status=noop key={} reason=unknown_id id={id}",
                self.store.key()
            );
            return;
        };

        if !self.prompt.confirm_delete(list[position].label()) {
            debug!(
                "event=list_delete module=widget status=noop key={} reason=declined id={id}",
                self.store.key()
            );
            return;
        }

        list.remove(position);
        self.commit(&list);
    }

    /// Applies an in-place mutation to the entry with the given id.
    ///
    /// Unknown ids are no-ops. Used by concrete widgets for operations like
    /// task toggling.
    pub(crate) fn update_entry(&mut self, id: EntryId, apply: impl FnOnce(&mut T)) {
        let mut list = self.store.load();
        let Some(entry) = list.iter_mut().find(|entry| entry.id() == id) else {
            debug!(
                "event=list_update module=widget status=noop key={} reason=unknown_id id={id}",
                self.store.key()
            );
            return;
        };

        apply(entry);
        self.commit(&list);
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub(crate) fn warn_unsupported(&self, action: &str) {
        warn!(
            "event=list_dispatch module=widget status=noop key={} reason=unsupported_action action={action}",
            self.store.key()
        );
    }

    fn commit(&mut self, list: &[T]) {
        match self.store.save(list) {
            Ok(()) => self.view.render(list),
            Err(err) => {
                // Persisted state is unchanged, so the previous render stays
                // authoritative; nothing happened from the user's view.
                error!(
                    "event=list_save module=widget status=error key={} error={err}",
                    self.store.key()
                );
            }
        }
    }
}
