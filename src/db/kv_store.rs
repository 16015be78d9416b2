use super::db::Db;
use crate::libs::error::Result;
use crate::libs::warning_cache::KeyValueStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

// Statements against the `kv_store` table created by migration v1.
const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM kv_store WHERE key = ?1";

/// SQLite-backed key/value store, one value per key.
///
/// ```rust
/// use liftlog::db::kv_store::KvStore;
/// use liftlog::libs::warning_cache::KeyValueStore;
///
/// let store = KvStore::in_memory().unwrap();
/// store.set("overtimeWarnings", "[]").unwrap();
/// assert_eq!(store.get("overtimeWarnings").unwrap().as_deref(), Some("[]"));
/// store.remove("overtimeWarnings").unwrap();
/// assert_eq!(store.get("overtimeWarnings").unwrap(), None);
/// ```
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Opens the store in the per-user data directory.
    pub fn new() -> Result<Self> {
        Ok(KvStore { conn: Db::new()?.conn })
    }

    /// Opens or creates the database file at `path`, migrating it first.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(KvStore { conn: Db::open(path)?.conn })
    }

    /// Store that lives only as long as the value.
    pub fn in_memory() -> Result<Self> {
        Ok(KvStore {
            conn: Db::open_in_memory()?.conn,
        })
    }

    /// Removes `key`; missing keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute(DELETE_VALUE, [key])?;
        Ok(())
    }
}

impl KeyValueStore for KvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.conn.query_row(SELECT_VALUE, [key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}
