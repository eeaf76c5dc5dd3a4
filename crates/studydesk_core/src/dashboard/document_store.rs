//! Document store contract and in-memory reference implementation.
//!
//! # Responsibility
//! - Mirror the remote collection interface the dashboard widgets are
//!   written against: subscribe, add, update, delete, query.
//! - Keep delivery semantics in one place: listeners receive the full
//!   collection snapshot immediately on subscribe and after every mutation.
//!
//! # Invariants
//! - Document ids are generated by the store and never reused.
//! - Mutations notify synchronously before returning.

use super::{DashboardError, DashboardResult};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier assigned by the store to each document.
pub type DocId = Uuid;

/// One stored document with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<T> {
    pub id: DocId,
    pub data: T,
}

/// Snapshot callback registered per collection.
pub type ChangeListener<T> = Box<dyn Fn(&[Document<T>])>;

/// Listener-based document collection store.
///
/// Collections are addressed by path (`artifacts/<app>/users/<uid>/notes`).
/// Implementations deliver the current snapshot to a listener at subscribe
/// time and re-deliver after every mutation of that collection.
pub trait DocumentStore<T: Clone> {
    /// Registers a change listener for one collection.
    fn subscribe(&mut self, collection: &str, listener: ChangeListener<T>);
    /// Appends a document and returns its generated id.
    fn add(&mut self, collection: &str, data: T) -> DashboardResult<DocId>;
    /// Applies an in-place mutation to one document.
    fn update(&mut self, collection: &str, id: DocId, apply: &dyn Fn(&mut T))
        -> DashboardResult<()>;
    /// Removes one document.
    fn remove(&mut self, collection: &str, id: DocId) -> DashboardResult<()>;
    /// Returns the documents matching a predicate, in insertion order.
    fn query_where(&self, collection: &str, predicate: &dyn Fn(&T) -> bool) -> Vec<Document<T>>;
}

/// In-memory store used by tests and the CLI probe.
pub struct MemoryDocumentStore<T> {
    collections: BTreeMap<String, Vec<Document<T>>>,
    listeners: BTreeMap<String, Vec<ChangeListener<T>>>,
}

impl<T> MemoryDocumentStore<T> {
    pub fn new() -> Self {
        Self {
            collections: BTreeMap::new(),
            listeners: BTreeMap::new(),
        }
    }
}

impl<T> Default for MemoryDocumentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MemoryDocumentStore<T> {
    fn notify(&self, collection: &str) {
        let Some(listeners) = self.listeners.get(collection) else {
            return;
        };
        let empty = Vec::new();
        let docs = self.collections.get(collection).unwrap_or(&empty);
        for listener in listeners {
            listener(docs);
        }
    }

    fn position(&self, collection: &str, id: DocId) -> Option<usize> {
        self.collections
            .get(collection)?
            .iter()
            .position(|doc| doc.id == id)
    }
}

impl<T: Clone> DocumentStore<T> for MemoryDocumentStore<T> {
    fn subscribe(&mut self, collection: &str, listener: ChangeListener<T>) {
        let empty = Vec::new();
        let docs = self.collections.get(collection).unwrap_or(&empty);
        listener(docs);
        self.listeners
            .entry(collection.to_string())
            .or_default()
            .push(listener);
    }

    fn add(&mut self, collection: &str, data: T) -> DashboardResult<DocId> {
        let id = Uuid::new_v4();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document { id, data });
        self.notify(collection);
        Ok(id)
    }

    fn update(
        &mut self,
        collection: &str,
        id: DocId,
        apply: &dyn Fn(&mut T),
    ) -> DashboardResult<()> {
        let position = self
            .position(collection, id)
            .ok_or(DashboardError::NotFound(id))?;
        if let Some(docs) = self.collections.get_mut(collection) {
            apply(&mut docs[position].data);
        }
        self.notify(collection);
        Ok(())
    }

    fn remove(&mut self, collection: &str, id: DocId) -> DashboardResult<()> {
        let position = self
            .position(collection, id)
            .ok_or(DashboardError::NotFound(id))?;
        if let Some(docs) = self.collections.get_mut(collection) {
            docs.remove(position);
        }
        self.notify(collection);
        Ok(())
    }

    fn query_where(&self, collection: &str, predicate: &dyn Fn(&T) -> bool) -> Vec<Document<T>> {
        self.collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| predicate(&doc.data))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
