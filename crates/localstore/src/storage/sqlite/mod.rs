//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of
//! [`KeyValueStore`](localstore_core::storage::KeyValueStore) using `rusqlite`
//! for the statements and `tokio-rusqlite` to run them off the async runtime.

mod error;
mod manifest;
mod repository;
mod schema;

pub use repository::SqliteStore;
