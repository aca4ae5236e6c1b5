//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;

/// A small SQLite-backed key-value store.
#[derive(Debug, Parser)]
#[command(name = "localstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the database.
    #[arg(long, env = "LOCALSTORE_DIR")]
    pub dir: Option<PathBuf>,

    /// Application name selecting the database.
    #[arg(long, env = "LOCALSTORE_NAME")]
    pub name: Option<String>,

    /// Application version expected by the database. Empty accepts any.
    #[arg(long = "db-version", env = "LOCALSTORE_VERSION")]
    pub db_version: Option<String>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.dir {
            config.dir = dir.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(version) = &self.db_version {
            config.version = version.clone();
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain values, one per line.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the value stored under a key.
    Get {
        /// Record key.
        key: String,
    },
    /// Store a value, replacing any existing one.
    Set {
        /// Record key.
        key: String,
        /// Record value.
        value: String,
    },
    /// Delete the record stored under a key.
    Remove {
        /// Record key.
        key: String,
    },
    /// Delete every record.
    Clear,
    /// List every key.
    Keys,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn base_config() -> Config {
        Config {
            dir: PathBuf::from(".localstore"),
            name: "localstore".to_string(),
            version: "0.0.0".to_string(),
            description: "Local storage database.".to_string(),
            estimated_size: 1024,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from(["localstore", "set", "theme", "dark"]).unwrap();

        match cli.command {
            Commands::Set { key, value } => {
                assert_eq!(key, "theme");
                assert_eq!(value, "dark");
            }
            other => panic!("Expected Set, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_format() {
        let cli = Cli::try_parse_from(["localstore", "--format", "json", "keys"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Keys));
    }

    #[test]
    fn test_in_memory_flag_is_not_accepted() {
        let result = Cli::try_parse_from(["localstore", "--in-memory", "keys"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from([
            "localstore",
            "--dir",
            "/tmp/data",
            "--name",
            "notes",
            "--db-version",
            "",
            "clear",
        ])
        .unwrap();

        let config = cli.apply(base_config());

        assert_eq!(config.dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.name, "notes");
        assert_eq!(config.version, "");
        assert_eq!(config.estimated_size, 1024);
    }
}
