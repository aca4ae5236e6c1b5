//! Reading and writing the manifest sidecar file.

use std::path::Path;

use localstore_core::storage::{Result, StoreError, StoreManifest};

/// Reads the manifest at `path`, returning `None` if the file does not exist.
pub async fn read(path: &Path) -> Result<Option<StoreManifest>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Manifest(format!(
                "Failed to read {}: {e}",
                path.display()
            )))
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| StoreError::Manifest(format!("Failed to parse {}: {e}", path.display())))
}

/// Writes `manifest` to `path`, replacing any existing file.
pub async fn write(path: &Path, manifest: &StoreManifest) -> Result<()> {
    let contents = serde_json::to_string_pretty(manifest)
        .map_err(|e| StoreError::Manifest(e.to_string()))?;

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| StoreError::Manifest(format!("Failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use localstore_core::storage::DatabaseIdentity;

    #[tokio::test]
    async fn test_read_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = read(&dir.path().join("absent.json")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        let manifest = StoreManifest::from(&DatabaseIdentity::new("app", "1.2"));

        write(&path, &manifest).await.unwrap();

        assert_eq!(read(&path).await.unwrap(), Some(manifest));
    }

    #[tokio::test]
    async fn test_read_corrupt_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let result = read(&path).await;

        assert!(matches!(result, Err(StoreError::Manifest(_))));
    }
}
