//! # inventory-server
//!
//! Starts the [`InventorySystem`] on the configured document store and serves the HTTP API
//! until SIGINT or SIGTERM.
//!
//! ```bash
//! # In-memory store on port 9000
//! inventory-server
//!
//! # Persist to ./data, reproduce the unserialized sale race
//! INVENTORY_STORE_URI=file://./data inventory-server --sale-mode unserialized
//! ```

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use inventory::config::{ServerArgs, ServerConfig};
use inventory::http::{self, AppState};
use inventory::lifecycle::InventorySystem;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let args = ServerArgs::parse();
    let config = ServerConfig::from_args(args)?;
    info!(?config, "Starting inventory server");

    let store = InventorySystem::connect_store(&config.store_uri).await;
    let system = InventorySystem::start(store, config.sale_mode, config.actor_buffer);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    http::serve(listener, AppState::new(&system), wait_for_shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await?;
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
