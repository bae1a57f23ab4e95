//! String key-value storage used by the history store.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal synchronous key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error.
    fn delete(&self, key: &str) -> AppResult<()>;
}

fn unavailable(e: rusqlite::Error) -> AppError {
    AppError::StorageUnavailable(e.to_string())
}

/// `kv_store` table of the application database.
pub struct SqliteKv<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteKv<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKv<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(unavailable)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, Local::now().to_rfc3339()],
            )
            .map_err(unavailable)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .map_err(unavailable)?;
        Ok(())
    }
}

/// Process-local store, handy for tests.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
