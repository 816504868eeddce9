//! coursepath serve command for running the HTTP server

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use coursepath_server::{AppState, CoursepathServer, ServerConfig};
use tracing::info;

use super::load_engine;
use crate::config::ConfigLoader;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Catalog snapshot to serve (overrides config)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Run the server in the foreground
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let server_config = ServerConfig::new(
        args.host.unwrap_or(config.server.host),
        args.port.unwrap_or(config.server.port),
    );
    let snapshot = args.snapshot.unwrap_or(config.catalog.snapshot);

    let engine = load_engine(&snapshot, &config.engine).await?;
    let state = Arc::new(AppState::new(Arc::new(engine)));

    info!(
        "Starting coursepath server on {} with snapshot {}",
        server_config.addr(),
        snapshot.display()
    );

    CoursepathServer::new(server_config, state)
        .run()
        .await
        .map_err(Into::into)
}
