//! Main AccountStore API
//!
//! The store owns the ordered account list and mirrors it into one
//! key-value slot. Every successful mutation writes the whole list;
//! there is no batching and no locking.

use std::collections::HashSet;
use crate::error::{AccountError, Result};
use crate::models::Account;
use crate::storage::KeyValueStorage;
use crate::utils::{IdGenerator, UuidGenerator};
use crate::DEFAULT_STORAGE_KEY;
use super::observers::{Subscribers, SubscriptionId};

/// Store settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Name of the persisted slot
    pub storage_key: String,
    /// Write indented JSON
    pub pretty_json: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pretty_json: false,
        }
    }
}

/// Account list with write-through persistence
pub struct AccountStore<S> {
    /// Backing key-value storage
    pub(crate) storage: S,
    /// Source of ids for new accounts
    pub(crate) ids: Box<dyn IdGenerator>,
    pub(crate) options: StoreOptions,
    /// In-memory list, in insertion order
    pub(crate) accounts: Vec<Account>,
    pub(crate) subscribers: Subscribers,
}

impl<S: KeyValueStorage> AccountStore<S> {
    /// Create an empty store over `storage` with default options and UUID ids
    ///
    /// Nothing is read until [`load_from_storage`](Self::load_from_storage).
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, StoreOptions::default())
    }

    /// Create an empty store with custom options
    pub fn with_options(storage: S, options: StoreOptions) -> Self {
        Self {
            storage,
            ids: Box::new(UuidGenerator),
            options,
            accounts: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Current accounts, in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Get an account by id
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Check whether an account with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Store options
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the store and return its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the persisted list, replacing the in-memory one
    ///
    /// An absent or empty slot leaves the in-memory list as it is. Content
    /// that does not parse as an account list is an error and leaves memory
    /// untouched.
    pub fn load_from_storage(&mut self) -> Result<()> {
        let key = &self.options.storage_key;

        let Some(saved) = self.storage.get(key)? else {
            tracing::debug!(key = %key, "No persisted accounts, keeping current list");
            return Ok(());
        };

        if saved.is_empty() {
            tracing::debug!(key = %key, "Persisted slot is empty, keeping current list");
            return Ok(());
        }

        let accounts: Vec<Account> = serde_json::from_str(&saved)
            .map_err(|e| AccountError::StorageRead(format!("slot '{}': {}", key, e)))?;

        let mut seen = HashSet::with_capacity(accounts.len());
        if let Some(dup) = accounts.iter().find(|a| !seen.insert(a.id.as_str())) {
            tracing::warn!(key = %key, id = %dup.id, "Persisted accounts contain a duplicate id");
        }

        tracing::debug!(key = %key, count = accounts.len(), "Accounts loaded");
        self.accounts = accounts;
        self.notify();
        Ok(())
    }

    /// Write the whole in-memory list to the persisted slot
    pub fn save_to_storage(&mut self) -> Result<()> {
        let text = if self.options.pretty_json {
            serde_json::to_string_pretty(&self.accounts)?
        } else {
            serde_json::to_string(&self.accounts)?
        };

        self.storage.set(&self.options.storage_key, &text)?;

        tracing::debug!(key = %self.options.storage_key, count = self.accounts.len(), "Accounts saved");
        Ok(())
    }

    /// Register a callback run with the full list after every change
    pub fn subscribe(&mut self, callback: impl FnMut(&[Account]) + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(callback))
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered callbacks
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn notify(&mut self) {
        self.subscribers.notify(&self.accounts);
    }
}
