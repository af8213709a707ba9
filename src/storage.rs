use crate::error::StorageError;
use rusqlite::{Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fixed slot name the vocabulary list lives under.
pub const VOCAB_KEY: &str = "vocabulary_app_vocabs";

/// A string-keyed slot store, localStorage-style. The store serializes the
/// whole vocabulary list into one slot; there are no incremental writes.
pub trait StorageMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\vocab-trainer")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/vocab-trainer")
    }
}

pub fn get_storage_path() -> PathBuf {
    get_data_dir().join("vocab.db")
}

/// Durable key-value slots backed by a single SQLite table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self { conn })
    }

    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(&get_storage_path())
    }
}

impl StorageMedium for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_slots WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM kv_slots WHERE key = ?", [key])?;
        Ok(())
    }
}

/// In-memory slots for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_set_and_get() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = SqliteStorage::open(&temp_dir.path().join("test.db")).unwrap();

        assert!(storage.get_item("missing").unwrap().is_none());

        storage.set_item("slot", "value").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = SqliteStorage::open(&temp_dir.path().join("test.db")).unwrap();

        storage.set_item("slot", "first").unwrap();
        storage.set_item("slot", "second").unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_sqlite_remove() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = SqliteStorage::open(&temp_dir.path().join("test.db")).unwrap();

        storage.set_item("slot", "value").unwrap();
        storage.remove_item("slot").unwrap();
        assert!(storage.get_item("slot").unwrap().is_none());

        // Removing an absent slot is a no-op.
        storage.remove_item("slot").unwrap();
    }

    #[test]
    fn test_sqlite_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");

        {
            let mut storage = SqliteStorage::open(&db_path).unwrap();
            storage.set_item("slot", "kept").unwrap();
        }

        let storage = SqliteStorage::open(&db_path).unwrap();
        assert_eq!(storage.get_item("slot").unwrap(), Some("kept".to_string()));
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get_item(VOCAB_KEY).unwrap().is_none());

        storage.set_item(VOCAB_KEY, "[]").unwrap();
        assert_eq!(storage.get_item(VOCAB_KEY).unwrap(), Some("[]".to_string()));

        storage.remove_item(VOCAB_KEY).unwrap();
        assert!(storage.get_item(VOCAB_KEY).unwrap().is_none());
    }
}
