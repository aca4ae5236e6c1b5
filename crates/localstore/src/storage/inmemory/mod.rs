//! In-memory storage backend for testing.
//!
//! Stores every record in a `HashMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and for throwaway sessions where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use localstore::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryStore;
