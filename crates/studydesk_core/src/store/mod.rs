//! Persistence boundary for sidebar widgets and the study timer.
//!
//! # Responsibility
//! - Define the key-value storage contract (`KvStore`) and its SQLite
//!   implementation.
//! - Provide typed whole-list persistence (`ListStore`) on top of it.
//!
//! # Invariants
//! - `put` is the sole write path; it always replaces the full value.
//! - List loads fail open to an empty sequence, never to an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod kv;
mod list_store;

pub use kv::{KvStore, SqliteKvStore};
pub use list_store::ListStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for key-value reads/writes and list serialization.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize list payload: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
