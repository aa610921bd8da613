//! Error types for the account store

use thiserror::Error;

/// Main error type for account store operations
#[derive(Error, Debug)]
pub enum AccountError {
    /// Persisted slot holds text that is not a valid account list
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Storage backend refused a write
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Account list could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage key cannot be used by the backend
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Id generator kept returning ids that are already in use
    #[error("Could not generate a unique id after {0} attempts")]
    IdCollision(usize),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for AccountError {
    fn from(err: rusqlite::Error) -> Self {
        AccountError::Database(err.to_string())
    }
}

impl From<tempfile::PersistError> for AccountError {
    fn from(err: tempfile::PersistError) -> Self {
        AccountError::StorageWrite(err.to_string())
    }
}

/// Result type alias for account store operations
pub type Result<T> = std::result::Result<T, AccountError>;
