use async_trait::async_trait;

use super::Result;

/// A string-keyed, string-valued store with at most one record per key.
///
/// Every method runs in its own transaction and resolves only after that
/// transaction has finished.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Gets the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Inserts or replaces the value stored under `key`.
    ///
    /// Returns `true` if at least one row was affected.
    async fn set(&self, key: &str, value: &str) -> Result<bool>;

    /// Deletes the record stored under `key`.
    ///
    /// Returns `true` if a record was deleted, `false` if the key was absent.
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Deletes every record.
    ///
    /// Returns `true` if at least one record was deleted.
    async fn clear(&self) -> Result<bool>;

    /// Lists all keys in ascending order.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Counts the stored records.
    async fn len(&self) -> Result<usize>;

    /// Returns `true` if the store holds no records.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Gets the value stored under `key`, or an empty string if absent.
    ///
    /// A missing key and an empty value are indistinguishable here; use
    /// [`KeyValueStore::get`] when the difference matters.
    async fn get_or_empty(&self, key: &str) -> Result<String> {
        Ok(self.get(key).await?.unwrap_or_default())
    }
}
