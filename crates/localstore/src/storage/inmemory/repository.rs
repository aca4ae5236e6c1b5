//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use localstore_core::storage::{KeyValueStore, Record, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.key, record.value))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        records.insert(key.to_string(), value.to_string());
        tracing::debug!(operation = "set", rows_affected = 1, "Rows affected");
        Ok(true)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let removed = records.remove(key).is_some();
        tracing::debug!(
            operation = "remove",
            rows_affected = usize::from(removed),
            "Rows affected"
        );
        Ok(removed)
    }

    async fn clear(&self) -> Result<bool> {
        let mut records = self.records.write().await;
        let rows = records.len();
        records.clear();
        tracing::debug!(operation = "clear", rows_affected = rows, "Rows affected");
        Ok(rows > 0)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let records = self.records.read().await;
        let mut keys: Vec<String> = records.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
