//! Pure helpers for turning a [`DatabaseIdentity`] into file names and for
//! validating it against an existing manifest.

use super::{DatabaseIdentity, Result, StoreError, StoreManifest};

/// Extension of the database file.
pub const DATABASE_EXTENSION: &str = "sqlite";

/// Extension of the manifest sidecar file.
pub const MANIFEST_EXTENSION: &str = "json";

/// Derives the file stem used for both the database and its manifest.
///
/// ASCII alphanumerics, `-`, `_` and `.` are kept; every other character
/// becomes `_`. Leading dots are stripped so the files are never hidden.
pub fn file_stem(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidIdentity(
            "name must not be empty".to_string(),
        ));
    }

    let stem: String = trimmed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');

    if stem.is_empty() || stem.chars().all(|c| c == '_' || c == '.') {
        return Err(StoreError::InvalidIdentity(format!(
            "name {name:?} has no usable characters"
        )));
    }

    Ok(stem.to_string())
}

/// File name of the database for `identity`.
pub fn database_file_name(identity: &DatabaseIdentity) -> Result<String> {
    Ok(format!("{}.{DATABASE_EXTENSION}", file_stem(&identity.name)?))
}

/// File name of the manifest for `identity`.
pub fn manifest_file_name(identity: &DatabaseIdentity) -> Result<String> {
    Ok(format!("{}.{MANIFEST_EXTENSION}", file_stem(&identity.name)?))
}

/// Checks that an existing manifest was written for the same name.
///
/// Distinct names can share a file stem, so the stem alone does not identify
/// a database.
pub fn check_name(identity: &DatabaseIdentity, manifest: &StoreManifest) -> Result<()> {
    if identity.name != manifest.name {
        return Err(StoreError::NameMismatch {
            expected: identity.name.clone(),
            found: manifest.name.clone(),
        });
    }

    Ok(())
}

/// Checks that an existing manifest is compatible with the requested identity.
///
/// An empty requested version accepts whatever version is on disk. Otherwise
/// a non-empty stored version must match exactly.
pub fn check_version(identity: &DatabaseIdentity, manifest: &StoreManifest) -> Result<()> {
    if identity.version.is_empty() || manifest.version.is_empty() {
        return Ok(());
    }

    if identity.version != manifest.version {
        return Err(StoreError::VersionMismatch {
            expected: identity.version.clone(),
            found: manifest.version.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_keeps_safe_characters() {
        assert_eq!(file_stem("my-app_v2.data").unwrap(), "my-app_v2.data");
    }

    #[test]
    fn test_file_stem_replaces_unsafe_characters() {
        assert_eq!(file_stem("My App/Notes").unwrap(), "My_App_Notes");
    }

    #[test]
    fn test_file_stem_strips_leading_dots() {
        assert_eq!(file_stem("..hidden").unwrap(), "hidden");
    }

    #[test]
    fn test_file_stem_rejects_empty() {
        assert!(matches!(
            file_stem("   "),
            Err(StoreError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn test_file_stem_rejects_only_separators() {
        assert!(matches!(
            file_stem("///"),
            Err(StoreError::InvalidIdentity(_))
        ));
        assert!(matches!(file_stem(".."), Err(StoreError::InvalidIdentity(_))));
    }

    #[test]
    fn test_file_names() {
        let identity = DatabaseIdentity::new("Grande QML", "1.0");

        assert_eq!(database_file_name(&identity).unwrap(), "Grande_QML.sqlite");
        assert_eq!(manifest_file_name(&identity).unwrap(), "Grande_QML.json");
    }

    #[test]
    fn test_check_name_matching() {
        let identity = DatabaseIdentity::new("My App", "1.0");
        let manifest = StoreManifest::from(&identity);

        assert!(check_name(&identity, &manifest).is_ok());
    }

    #[test]
    fn test_check_name_rejects_colliding_stem() {
        let identity = DatabaseIdentity::new("My/App", "1.0");
        let manifest = StoreManifest::from(&DatabaseIdentity::new("My App", "1.0"));

        assert_eq!(file_stem("My/App").unwrap(), file_stem("My App").unwrap());
        assert_eq!(
            check_name(&identity, &manifest),
            Err(StoreError::NameMismatch {
                expected: "My/App".to_string(),
                found: "My App".to_string(),
            })
        );
    }

    #[test]
    fn test_check_version_matching() {
        let identity = DatabaseIdentity::new("app", "1.0");
        let manifest = StoreManifest::from(&identity);

        assert!(check_version(&identity, &manifest).is_ok());
    }

    #[test]
    fn test_check_version_mismatch() {
        let identity = DatabaseIdentity::new("app", "2.0");
        let manifest = StoreManifest::from(&DatabaseIdentity::new("app", "1.0"));

        assert_eq!(
            check_version(&identity, &manifest),
            Err(StoreError::VersionMismatch {
                expected: "2.0".to_string(),
                found: "1.0".to_string(),
            })
        );
    }

    #[test]
    fn test_check_version_empty_request_accepts_any() {
        let identity = DatabaseIdentity::new("app", "");
        let manifest = StoreManifest::from(&DatabaseIdentity::new("app", "3.4"));

        assert!(check_version(&identity, &manifest).is_ok());
    }

    #[test]
    fn test_check_version_empty_stored_accepts_any() {
        let identity = DatabaseIdentity::new("app", "1.0");
        let manifest = StoreManifest::from(&DatabaseIdentity::new("app", ""));

        assert!(check_version(&identity, &manifest).is_ok());
    }
}
