//! `catalog serve` command.
//!
//! Builds the item store from configuration and exposes it over HTTP until
//! Ctrl-C is received.

use std::net::IpAddr;

use clap::Args;

use catalog_config::CatalogConfig;
use catalog_transport_http::HttpServer;

use crate::shared;

/// Start the HTTP API.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides `server.host`).
    #[arg(long)]
    pub host: Option<IpAddr>,
    /// TCP port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, mut config: CatalogConfig) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let repo = shared::open_repository(&config)?;
    tracing::info!(items = repo.len()?, "item store ready");

    let server = HttpServer::new(
        repo,
        config.server.socket_addr(),
        config.http.empty_filter,
    );
    server
        .run(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
