use serde::{Deserialize, Serialize};

/// Name of the single table holding every record.
pub const TABLE_NAME: &str = "localStorage";

/// Description recorded for a database when none is given.
pub const DEFAULT_DESCRIPTION: &str = "Local storage database.";

/// Estimated size hint, in bytes, recorded when none is given.
pub const DEFAULT_ESTIMATED_SIZE: u64 = 1024 * 1024;

/// A single key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Identifies a database on disk.
///
/// `name` and `version` select the database; `description` and
/// `estimated_size` are informational and only recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseIdentity {
    pub name: String,
    pub version: String,
    pub description: String,
    pub estimated_size: u64,
}

impl DatabaseIdentity {
    /// Creates an identity with the default description and size hint.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            estimated_size: DEFAULT_ESTIMATED_SIZE,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_estimated_size(mut self, estimated_size: u64) -> Self {
        self.estimated_size = estimated_size;
        self
    }
}

/// Sidecar file written next to a database recording the identity it was
/// created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub estimated_size: u64,
}

impl From<&DatabaseIdentity> for StoreManifest {
    fn from(identity: &DatabaseIdentity) -> Self {
        Self {
            name: identity.name.clone(),
            version: identity.version.clone(),
            description: identity.description.clone(),
            estimated_size: identity.estimated_size,
        }
    }
}
