//! SQLite storage backend

use std::path::{Path, PathBuf};
use rusqlite::{Connection, OptionalExtension, params};
use crate::error::{AccountError, Result};
use super::{KeyValueStorage, schema};

/// Key-value storage in a single SQLite table
pub struct SqliteStorage {
    /// Path to the database file, `None` for in-memory databases
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) a database at the specified path
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(schema::CREATE_KV_TABLE, [])?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(schema::CREATE_KV_TABLE, [])?;
        Ok(Self { path: None, conn })
    }

    /// Get the database path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(schema::SELECT_VALUE, params![key], |row| row.get(0))
            .optional()
            .map_err(|e| AccountError::StorageRead(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(schema::UPSERT_VALUE, params![key, value])
            .map_err(|e| AccountError::StorageWrite(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_roundtrip() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.get("accounts").unwrap().is_none());

        storage.set("accounts", "[]").unwrap();
        storage.set("accounts", "[{}]").unwrap();
        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some("[{}]"));
        assert!(storage.path().is_none());
    }

    #[test]
    fn test_single_row_per_key() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();
        storage.set("b", "3").unwrap();

        let count: i64 = storage.connection()
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_reopen_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("store.db");

        {
            let mut storage = SqliteStorage::open(&db_path).unwrap();
            storage.set("accounts", "persisted").unwrap();
            assert_eq!(storage.path(), Some(db_path.as_path()));
        }

        let storage = SqliteStorage::open(&db_path).unwrap();
        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_write_refused_on_read_only_connection() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("store.db");
        SqliteStorage::open(&db_path).unwrap();

        let conn = Connection::open_with_flags(&db_path, rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY).unwrap();
        let mut storage = SqliteStorage { path: Some(db_path), conn };

        let err = storage.set("accounts", "[]").unwrap_err();
        assert!(matches!(err, AccountError::StorageWrite(_)));
    }
}
