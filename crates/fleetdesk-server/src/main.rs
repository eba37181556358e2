//! `FleetDesk` Server
//!
//! REST API for the computer inventory dashboard.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use fleetdesk_core::RecordStore;
use fleetdesk_core::config::load_config;
use fleetdesk_core::tracing_init::{default_filter, init_tracing};
use fleetdesk_server::{AppState, build_router};

#[derive(Parser, Debug)]
#[command(name = "fleetdesk-server")]
#[command(version, about = "FleetDesk computer inventory API server")]
struct Args {
    /// Path to a JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides config).
    #[arg(long)]
    addr: Option<String>,

    /// Directory with the built dashboard to serve (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Start with an empty inventory instead of the sample computers.
    #[arg(long)]
    no_seed: bool,

    /// Output logs as JSON (for structured log aggregation).
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.listen_addr = addr;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = Some(dir);
    }
    if args.no_seed {
        config.server.seed_sample_data = false;
    }

    init_tracing(
        &default_filter("fleetdesk_server", &config.server.log_level),
        args.log_json,
    );

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server.listen_addr,
        "Starting fleetdesk-server"
    );

    let store = if config.server.seed_sample_data {
        RecordStore::with_sample_data().await
    } else {
        RecordStore::new()
    };
    if let Some(dir) = &config.server.static_dir {
        info!(path = %dir.display(), "Serving dashboard assets");
    }

    let app = build_router(AppState::new(store), &config.server);
    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
