//! Executes CLI commands against a store.

use localstore_core::storage::{KeyValueStore, Result};

use crate::cli::{Commands, OutputFormat};
use crate::output::{format_keys, format_outcome, format_value};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text to print on stdout, if any.
    pub stdout: Option<String>,
    /// `false` when a `get` found no record.
    pub found: bool,
}

impl CommandOutput {
    fn printed(stdout: String) -> Self {
        Self {
            stdout: Some(stdout),
            found: true,
        }
    }
}

/// Runs `command` against `store`.
///
/// Mutation outcomes are suppressed when `quiet` is set; values and keys are
/// always printed.
pub async fn execute(
    store: &dyn KeyValueStore,
    command: &Commands,
    format: OutputFormat,
    quiet: bool,
) -> Result<CommandOutput> {
    let outcome = |operation: &str, changed: bool| CommandOutput {
        stdout: (!quiet).then(|| format_outcome(operation, changed, format)),
        found: true,
    };

    match command {
        Commands::Get { key } => {
            let value = store.get(key).await?;
            if value.is_none() {
                tracing::debug!(key = %key, "Key not found");
            }
            Ok(CommandOutput {
                stdout: Some(format_value(key, value.as_deref(), format)),
                found: value.is_some(),
            })
        }
        Commands::Set { key, value } => {
            let changed = store.set(key, value).await?;
            Ok(outcome("set", changed))
        }
        Commands::Remove { key } => {
            let changed = store.remove(key).await?;
            Ok(outcome("remove", changed))
        }
        Commands::Clear => {
            let changed = store.clear().await?;
            Ok(outcome("clear", changed))
        }
        Commands::Keys => {
            let keys = store.keys().await?;
            Ok(CommandOutput::printed(format_keys(&keys, format)))
        }
    }
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    fn get(key: &str) -> Commands {
        Commands::Get {
            key: key.to_string(),
        }
    }

    fn set(key: &str, value: &str) -> Commands {
        Commands::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryStore::new();

        let output = execute(&store, &get("nope"), OutputFormat::Text, false)
            .await
            .unwrap();

        assert!(!output.found);
        assert_eq!(output.stdout, Some(String::new()));
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryStore::new();

        let output = execute(&store, &set("theme", "dark"), OutputFormat::Text, false)
            .await
            .unwrap();
        assert_eq!(output.stdout, Some("Stored.".to_string()));

        let output = execute(&store, &get("theme"), OutputFormat::Text, false)
            .await
            .unwrap();
        assert!(output.found);
        assert_eq!(output.stdout, Some("dark".to_string()));
    }

    #[tokio::test]
    async fn test_quiet_suppresses_outcome() {
        let store = InMemoryStore::new();

        let output = execute(&store, &Commands::Clear, OutputFormat::Text, true)
            .await
            .unwrap();

        assert_eq!(output.stdout, None);
    }

    #[tokio::test]
    async fn test_remove_reports_no_change() {
        let store = InMemoryStore::new();

        let output = execute(
            &store,
            &Commands::Remove {
                key: "ghost".to_string(),
            },
            OutputFormat::Json,
            false,
        )
        .await
        .unwrap();

        assert_eq!(
            output.stdout,
            Some(r#"{"changed":false,"operation":"remove"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_keys_json() {
        let store = InMemoryStore::new();
        store.set("b", "2").await.unwrap();
        store.set("a", "1").await.unwrap();

        let output = execute(&store, &Commands::Keys, OutputFormat::Json, true)
            .await
            .unwrap();

        assert_eq!(output.stdout, Some(r#"["a","b"]"#.to_string()));
    }
}
