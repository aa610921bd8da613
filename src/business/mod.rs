//! Account store
//!
//! This module provides the high-level [`AccountStore`] API for managing
//! the account list, its persisted mirror and change subscriptions.

pub mod store;
pub mod accounts;
pub mod labels;
pub mod observers;

pub use store::{AccountStore, StoreOptions};
pub use labels::{format_labels, parse_labels};
pub use observers::SubscriptionId;
