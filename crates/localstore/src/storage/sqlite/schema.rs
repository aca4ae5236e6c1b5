//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. The table name is fixed to
//! [`localstore_core::storage::TABLE_NAME`].

/// SQL statement to create the record table. A no-op when it already exists.
pub const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS localStorage (key TEXT UNIQUE NOT NULL, value TEXT);";

/// Look up the value stored under a key.
pub const SELECT_VALUE: &str = "SELECT value FROM localStorage WHERE key=?;";

/// Insert a record, replacing any record with the same key.
pub const UPSERT: &str = "INSERT OR REPLACE INTO localStorage VALUES (?,?);";

/// Delete the record stored under a key.
pub const DELETE_KEY: &str = "DELETE FROM localStorage WHERE key=?;";

/// Delete every record.
pub const DELETE_ALL: &str = "DELETE FROM localStorage;";

/// List every key in ascending order.
pub const SELECT_KEYS: &str = "SELECT key FROM localStorage ORDER BY key;";

/// Count the records.
pub const COUNT: &str = "SELECT COUNT(*) FROM localStorage;";
