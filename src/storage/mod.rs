//! Key-value storage layer
//!
//! The account store persists through a narrow string key-value port:
//! - `get(key)` returns the stored text, or `None` if the slot is empty
//! - `set(key, text)` overwrites the slot
//!
//! There are no transactions and no locking; the last write wins.

pub mod memory;
pub mod file;
pub mod sqlite;
pub mod schema;

pub use memory::MemoryStorage;
pub use file::FileStorage;
pub use sqlite::SqliteStorage;

use crate::error::Result;

/// Synchronous string key-value storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_value<S: KeyValueStorage>(mut storage: S) {
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_mut_ref_storage() {
        let mut backend = MemoryStorage::new();
        store_value(&mut backend);
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_boxed_storage() {
        let mut boxed: Box<dyn KeyValueStorage> = Box::new(MemoryStorage::new());
        assert!(boxed.get("k").unwrap().is_none());
        boxed.set("k", "v").unwrap();
        assert_eq!(boxed.get("k").unwrap().as_deref(), Some("v"));
    }
}
