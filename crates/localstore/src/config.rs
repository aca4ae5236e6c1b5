use std::{env, path::PathBuf};

use localstore_core::storage::{DatabaseIdentity, DEFAULT_DESCRIPTION, DEFAULT_ESTIMATED_SIZE};

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the database and its manifest (default: ".localstore")
    pub dir: PathBuf,
    /// Application name selecting the database (default: "localstore")
    pub name: String,
    /// Application version recorded with the database (default: crate version)
    pub version: String,
    /// Human readable description (default: "Local storage database.")
    pub description: String,
    /// Estimated size hint in bytes (default: 1,048,576)
    pub estimated_size: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOCALSTORE_DIR` - Database directory (default: ".localstore")
    /// - `LOCALSTORE_NAME` - Application name (default: "localstore")
    /// - `LOCALSTORE_VERSION` - Application version (default: crate version)
    /// - `LOCALSTORE_DESCRIPTION` - Description (default: "Local storage database.")
    /// - `LOCALSTORE_ESTIMATED_SIZE` - Size hint in bytes (default: 1,048,576)
    pub fn from_env() -> Self {
        Self {
            dir: env::var("LOCALSTORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".localstore")),
            name: env::var("LOCALSTORE_NAME").unwrap_or_else(|_| "localstore".to_string()),
            version: env::var("LOCALSTORE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("LOCALSTORE_DESCRIPTION")
                .unwrap_or_else(|_| DEFAULT_DESCRIPTION.to_string()),
            estimated_size: env::var("LOCALSTORE_ESTIMATED_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ESTIMATED_SIZE),
        }
    }

    /// Build the database identity described by this configuration.
    pub fn identity(&self) -> DatabaseIdentity {
        DatabaseIdentity::new(self.name.clone(), self.version.clone())
            .with_description(self.description.clone())
            .with_estimated_size(self.estimated_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
