//! # acctkeep
//!
//! An account list store with write-through persistence.
//!
//! ## Features
//!
//! - Ordered in-memory list of accounts (LDAP or local credentials)
//! - Every mutation mirrored to a single key-value slot as JSON
//! - Pluggable storage backends (memory, file, SQLite)
//! - Injectable id generation
//! - Change subscriptions for UI layers
//!
//! ## Example
//!
//! ```no_run
//! use acctkeep::{AccountStore, AccountType, MemoryStorage, NewAccount, parse_labels};
//!
//! let mut store = AccountStore::new(MemoryStorage::new());
//! store.load_from_storage().unwrap();
//!
//! let id = store.add_account(NewAccount {
//!     labels: parse_labels("work; vpn"),
//!     kind: AccountType::Local,
//!     login: "bob".to_string(),
//!     password: Some("secret".to_string()),
//! }).unwrap();
//!
//! for account in store.accounts() {
//!     println!("{}: {}", account.id, account.login);
//! }
//! # let _ = id;
//! ```

pub mod business;
pub mod error;
pub mod models;
pub mod storage;
pub mod utils;

// Re-export main types
pub use error::{AccountError, Result};
pub use models::{Account, AccountForm, AccountType, LabelItem, NewAccount};
pub use business::{AccountStore, StoreOptions, SubscriptionId, format_labels, parse_labels};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, SqliteStorage};
pub use utils::{IdGenerator, RandomIdGenerator, SequentialIdGenerator, UuidGenerator};

/// Name of the persisted slot holding the account list
pub const DEFAULT_STORAGE_KEY: &str = "accounts";

/// Delimiter between labels in raw label input
pub const LABEL_DELIMITER: char = ';';

/// Separator used when rendering labels back into raw input
pub const LABEL_JOIN_SEPARATOR: &str = "; ";

/// Default length of ids produced by [`RandomIdGenerator`]
pub const DEFAULT_RANDOM_ID_LENGTH: usize = 16;

/// How many times a colliding id is regenerated before giving up
pub const MAX_ID_ATTEMPTS: usize = 8;

/// File extension used by [`FileStorage`]
pub const STORAGE_FILE_EXTENSION: &str = "json";
