//! Vocalis Server Entry Point
//!
//! Binds the HTTP listener and serves the sampling endpoint until the
//! process is killed. Logs go to stderr via `tracing`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vocalis::{server, ServerConfig, SqliteStore};

/// Vocalis - Random transcript sampling HTTP service
#[derive(Parser)]
#[command(name = "vocalis")]
#[command(about = "Random transcript sampling HTTP service with exclusion filters")]
#[command(version)]
struct Cli {
    /// Path to the SQLite corpus database
    #[arg(long, default_value = "corpus.db")]
    database: PathBuf,

    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind (0 for auto-assign)
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let config = ServerConfig { host: cli.host, port: cli.port };
    let store = Arc::new(SqliteStore::new(cli.database));

    let handle = server::start(config, store).await?;
    handle.wait().await;

    Ok(())
}
