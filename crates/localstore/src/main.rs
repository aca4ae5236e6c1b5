use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use localstore::cli::Cli;
use localstore::commands::execute;
use localstore::storage::SqliteStore;
use localstore::{Config, KeyValueStore};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "localstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env());
    let identity = config.identity();

    let store = SqliteStore::open(identity, &config.dir)
        .await
        .with_context(|| format!("failed to open store in {}", config.dir.display()))?;

    let output = execute(&store as &dyn KeyValueStore, &cli.command, cli.format, cli.quiet).await?;

    if let Some(stdout) = output.stdout {
        if !stdout.is_empty() {
            println!("{stdout}");
        }
    }

    Ok(if output.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
