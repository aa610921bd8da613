//! File storage backend
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary file in the
//! same directory which is then renamed over the target, so a reader never
//! sees a half-written slot. The file and, on Unix, the directory entry are
//! synced before `set` returns.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use crate::error::{AccountError, Result};
use crate::STORAGE_FILE_EXTENSION;
use super::KeyValueStorage;

/// Directory-backed storage, one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }
}

/// Keys become file names, so path syntax is rejected
fn validate_key(key: &str) -> Result<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        return Err(AccountError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Flush the directory entry so a completed rename survives a crash
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AccountError::StorageRead(format!("{}: {}", path.display(), e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let write_err = |e: std::io::Error| {
            AccountError::StorageWrite(format!("{}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path)?;
        sync_dir(&self.dir).map_err(write_err)?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert!(storage.get("accounts").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        storage.set("accounts", "[]").unwrap();
        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("accounts.json").exists());
    }

    #[test]
    fn test_set_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let mut storage = FileStorage::new(&nested);

        storage.set("accounts", "[]").unwrap();
        assert!(nested.join("accounts.json").exists());
    }

    #[test]
    fn test_overwrite_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        storage.set("accounts", "first").unwrap();
        storage.set("accounts", "second").unwrap();

        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some("second"));
        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_sync_dir() {
        let temp_dir = TempDir::new().unwrap();
        sync_dir(temp_dir.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_sync_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(sync_dir(&temp_dir.path().join("gone")).is_err());
    }

    #[test]
    fn test_zero_byte_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("accounts.json"), "").unwrap();

        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get("accounts").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        for key in ["", ".", "..", "../escape", "a/b", "a\\b"] {
            assert!(matches!(storage.get(key), Err(AccountError::InvalidKey(_))), "key {:?}", key);
            assert!(matches!(storage.set(key, "x"), Err(AccountError::InvalidKey(_))), "key {:?}", key);
        }
    }
}
