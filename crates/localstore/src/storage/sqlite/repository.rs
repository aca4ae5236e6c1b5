//! SQLite store implementation.
//!
//! Implements [`KeyValueStore`] from `localstore_core::storage` using SQLite.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::TransactionBehavior;
use tokio_rusqlite::Connection;

use localstore_core::storage::{
    identity, DatabaseIdentity, KeyValueStore, Result, StoreError, StoreManifest,
};

use super::error::{map_open_error, map_tokio_rusqlite_error};
use super::{manifest, schema};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed key-value store.
///
/// Holds one connection for its whole lifetime. The connection lives on a
/// dedicated thread owned by `tokio-rusqlite`, which runs the closures sent
/// to it one at a time. Clones share that connection; it is closed when the
/// last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Connection,
    identity: Arc<DatabaseIdentity>,
    path: Option<PathBuf>,
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore")
            .field("identity", &self.identity)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Opens the database identified by `identity` inside `dir`.
    ///
    /// The directory and database file are created if they don't exist, the
    /// record table is created if missing, and a manifest recording the
    /// identity is written on first open.
    ///
    /// Fails with [`StoreError::NameMismatch`] when the manifest was written
    /// for another name mapping to the same file, with
    /// [`StoreError::VersionMismatch`] when it carries a different non-empty
    /// version, and with [`StoreError::Manifest`] when the manifest is missing
    /// but the database already holds records.
    pub async fn open(identity: DatabaseIdentity, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let db_path = dir.join(identity::database_file_name(&identity)?);
        let manifest_path = dir.join(identity::manifest_file_name(&identity)?);

        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StoreError::ConnectionFailed(format!("Cannot create {}: {e}", dir.display()))
        })?;

        let existing = manifest::read(&manifest_path).await?;
        if let Some(stored) = &existing {
            identity::check_name(&identity, stored)?;
            identity::check_version(&identity, stored)?;
        }

        let db_existed = tokio::fs::try_exists(&db_path).await.map_err(|e| {
            StoreError::ConnectionFailed(format!("Cannot access {}: {e}", db_path.display()))
        })?;

        let conn = Connection::open(&db_path).await.map_err(map_open_error)?;
        Self::init_schema(&conn).await?;

        if existing.is_none() {
            if db_existed && Self::count_records(&conn).await? > 0 {
                return Err(StoreError::Manifest(format!(
                    "{} is missing but {} already holds records",
                    manifest_path.display(),
                    db_path.display()
                )));
            }
            manifest::write(&manifest_path, &StoreManifest::from(&identity)).await?;
        }

        tracing::info!(
            name = %identity.name,
            version = %identity.version,
            path = %db_path.display(),
            "Opened local store"
        );

        Ok(Self {
            conn,
            identity: Arc::new(identity),
            path: Some(db_path),
        })
    }

    /// Opens a store backed by an in-memory SQLite database.
    ///
    /// Nothing touches disk and no manifest is written. Data is lost when the
    /// last clone is dropped.
    pub async fn open_in_memory(identity: DatabaseIdentity) -> Result<Self> {
        identity::file_stem(&identity.name)?;

        let conn = Connection::open_in_memory()
            .await
            .map_err(map_open_error)?;
        Self::init_schema(&conn).await?;

        tracing::debug!(name = %identity.name, "Opened in-memory local store");

        Ok(Self {
            conn,
            identity: Arc::new(identity),
            path: None,
        })
    }

    /// The identity this store was opened with.
    pub fn identity(&self) -> &DatabaseIdentity {
        &self.identity
    }

    /// Path of the database file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(wrap_err)?;
            tx.execute_batch(schema::CREATE_TABLE).map_err(wrap_err)?;
            tx.commit().map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_open_error)
    }

    /// Counts the records in a read transaction.
    async fn count_records(conn: &Connection) -> Result<usize> {
        conn.call(|conn| {
            let tx = conn
                .transaction_with_behavior(TransactionBehavior::Deferred)
                .map_err(wrap_err)?;
            let count: i64 = tx
                .query_row(schema::COUNT, [], |row| row.get(0))
                .map_err(wrap_err)?;
            tx.commit().map_err(wrap_err)?;
            Ok(count)
        })
        .await
        .map_err(map_tokio_rusqlite_error)
        .and_then(|count| {
            usize::try_from(count)
                .map_err(|_| StoreError::QueryFailed(format!("Invalid row count: {count}")))
        })
    }

    /// Runs one mutating statement in a read-write transaction and returns
    /// the number of rows it affected.
    async fn write(
        &self,
        operation: &'static str,
        sql: &'static str,
        params: Vec<String>,
    ) -> Result<usize> {
        let rows = self
            .conn
            .call(move |conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Immediate)
                    .map_err(wrap_err)?;
                let rows = tx
                    .execute(sql, rusqlite::params_from_iter(params.iter()))
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(rows)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!(operation, rows_affected = rows, "Rows affected");

        Ok(rows)
    }
}

// ============================================================================
// KeyValueStore implementation
// ============================================================================

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();

        self.conn
            .call(move |conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Deferred)
                    .map_err(wrap_err)?;
                let value = {
                    let mut stmt = tx.prepare(schema::SELECT_VALUE).map_err(wrap_err)?;
                    match stmt.query_row([&key], |row| row.get::<_, Option<String>>(0)) {
                        Ok(value) => Some(value.unwrap_or_default()),
                        Err(rusqlite::Error::QueryReturnedNoRows) => None,
                        Err(e) => return Err(wrap_err(e)),
                    }
                };
                tx.commit().map_err(wrap_err)?;
                Ok(value)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<bool> {
        let rows = self
            .write("set", schema::UPSERT, vec![key.to_string(), value.to_string()])
            .await?;
        Ok(rows > 0)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let rows = self
            .write("remove", schema::DELETE_KEY, vec![key.to_string()])
            .await?;
        Ok(rows > 0)
    }

    async fn clear(&self) -> Result<bool> {
        let rows = self.write("clear", schema::DELETE_ALL, Vec::new()).await?;
        Ok(rows > 0)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.conn
            .call(|conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Deferred)
                    .map_err(wrap_err)?;
                let keys = {
                    let mut stmt = tx.prepare(schema::SELECT_KEYS).map_err(wrap_err)?;
                    let rows = stmt
                        .query_map([], |row| row.get::<_, String>(0))
                        .map_err(wrap_err)?;

                    let mut keys = Vec::new();
                    for row_result in rows {
                        keys.push(row_result.map_err(wrap_err)?);
                    }
                    keys
                };
                tx.commit().map_err(wrap_err)?;
                Ok(keys)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn len(&self) -> Result<usize> {
        Self::count_records(&self.conn).await
    }
}
