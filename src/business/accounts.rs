//! Account operations
//!
//! Add, update and remove, each followed by a full save. If the save fails
//! the in-memory change is undone before the error is returned, so memory
//! and storage stay in step.

use crate::error::{AccountError, Result};
use crate::models::{Account, NewAccount};
use crate::storage::KeyValueStorage;
use crate::MAX_ID_ATTEMPTS;
use super::store::AccountStore;

impl<S: KeyValueStorage> AccountStore<S> {
    /// Append a new account and persist. Returns the generated id.
    pub fn add_account(&mut self, account: NewAccount) -> Result<String> {
        let id = self.fresh_id()?;
        self.accounts.push(Account::from_new(id.clone(), account));

        if let Err(e) = self.save_to_storage() {
            self.accounts.pop();
            tracing::warn!(id = %id, error = %e, "Save failed, account not added");
            return Err(e);
        }

        tracing::info!(id = %id, count = self.accounts.len(), "Account added");
        self.notify();
        Ok(id)
    }

    /// Replace the fields of the account with `id`, keeping its position
    ///
    /// An unknown id is a no-op: nothing is saved and `false` is returned.
    pub fn update_account(&mut self, id: &str, account: NewAccount) -> Result<bool> {
        let Some(index) = self.accounts.iter().position(|a| a.id == id) else {
            tracing::debug!(id = %id, "Update skipped, no such account");
            return Ok(false);
        };

        let previous = std::mem::replace(&mut self.accounts[index], Account::from_new(id, account));

        if let Err(e) = self.save_to_storage() {
            self.accounts[index] = previous;
            tracing::warn!(id = %id, error = %e, "Save failed, update reverted");
            return Err(e);
        }

        tracing::debug!(id = %id, index, "Account updated");
        self.notify();
        Ok(true)
    }

    /// Remove every account with `id` and persist
    ///
    /// The list is saved even when nothing matched. Returns whether an
    /// account was removed.
    pub fn remove_account(&mut self, id: &str) -> Result<bool> {
        let previous = std::mem::take(&mut self.accounts);
        self.accounts = previous.iter().filter(|a| a.id != id).cloned().collect();
        let removed = self.accounts.len() != previous.len();

        if let Err(e) = self.save_to_storage() {
            self.accounts = previous;
            tracing::warn!(id = %id, error = %e, "Save failed, removal reverted");
            return Err(e);
        }

        if removed {
            tracing::info!(id = %id, count = self.accounts.len(), "Account removed");
        } else {
            tracing::debug!(id = %id, "Remove matched nothing, list re-saved");
        }
        self.notify();
        Ok(removed)
    }

    /// Ask the generator for an id not already in the list
    fn fresh_id(&mut self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !self.contains(&id) {
                return Ok(id);
            }
            tracing::warn!(id = %id, "Generated id already in use, retrying");
        }
        Err(AccountError::IdCollision(MAX_ID_ATTEMPTS))
    }
}
