//! Storage backend implementations.
//!
//! Concrete implementations of
//! [`KeyValueStore`](localstore_core::storage::KeyValueStore), selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory` (default): HashMap-backed storage for tests and throwaway sessions
//!
//! # Examples
//!
//! Build without the SQLite backend:
//! ```bash
//! cargo build -p localstore --lib --no-default-features --features inmemory
//! ```

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p localstore --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
