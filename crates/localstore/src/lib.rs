//! localstore - a small SQLite-backed key-value store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod storage;

pub use config::Config;
pub use localstore_core::storage::{DatabaseIdentity, KeyValueStore, Result, StoreError};
