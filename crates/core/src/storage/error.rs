use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing key is not an error (`get` returns `None`) and neither is a
/// write that touched no rows (mutators return `false`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid database identity: {0}")]
    InvalidIdentity(String),
    #[error("Database version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
    #[error("Database name mismatch: expected {expected}, found {found}")]
    NameMismatch { expected: String, found: String },
    #[error("Manifest error: {0}")]
    Manifest(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
