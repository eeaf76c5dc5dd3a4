//! Key-value storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable per-key text storage scoped to one database file.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - One row per key; `put` replaces the previous value wholesale.
//! - `updated_at` is refreshed on every write.

use super::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value storage behind sidebar lists and timer state.
///
/// The storage scope is the backing database file; everything sharing a
/// connection shares one scope, like widgets sharing a browser origin.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites the full value for `key`. The sole write path.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Deletes the key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// SQLite-backed key-value store over a migrated connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
