//! Typed whole-list persistence over key-value storage.
//!
//! # Responsibility
//! - Serialize one ordered sequence per storage key as a JSON array.
//! - Enforce the load/save contract the widget controllers rely on.
//!
//! # Invariants
//! - `load` never fails: absent, unreadable, or unparseable state degrades
//!   to an empty sequence with a logged diagnostic.
//! - `save` writes the full sequence; there are no partial or append writes.
//!
//! Concurrent writers sharing one database file are not coordinated: the
//! last full-list writer wins. Widgets are expected to run on a single
//! event loop.

use super::{KvStore, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Whole-list store for one storage key.
pub struct ListStore<K: KvStore, T> {
    kv: K,
    key: String,
    _entry: PhantomData<fn() -> T>,
}

impl<K: KvStore, T> ListStore<K, T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            _entry: PhantomData,
        }
    }

    /// Storage key this list persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the persisted sequence.
    ///
    /// Fails open: a key that was never written, a storage error, or a
    /// payload that no longer parses all yield an empty list. The caller
    /// never sees an error; diagnostics go to the operator log.
    pub fn load(&self) -> Vec<T> {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=list_load module=store status=fallback key={} reason=storage_error error={err}",
                    self.key
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!(
                    "event=list_load module=store status=fallback key={} reason=corrupt_payload error={err}",
                    self.key
                );
                Vec::new()
            }
        }
    }

    /// Serializes the full sequence and overwrites the previous value.
    pub fn save(&self, list: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(list)?;
        self.kv.put(&self.key, &payload)
    }
}
