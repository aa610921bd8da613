//! SQLite schema for the key-value table

/// SQL to create the key-value table
pub const CREATE_KV_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key             TEXT NOT NULL PRIMARY KEY,
    value           TEXT NOT NULL
)
"#;

/// Read one slot
pub const SELECT_VALUE: &str = "SELECT value FROM kv_store WHERE key = ?1";

/// Insert or replace one slot
pub const UPSERT_VALUE: &str = r#"
INSERT INTO kv_store (key, value) VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

