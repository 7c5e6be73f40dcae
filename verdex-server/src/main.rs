//! # Verdex Server
//!
//! Catalog and subscription service for the Verdex plant guide.
//!
//! ## Overview
//!
//! - **Catalog browsing**: filter/search/sort/paginate over the plant list
//! - **Favorites**: durable, toggled per entry, keyed by stable id
//! - **Checkout**: plan selection, payment confirmation with a signed
//!   gateway callback, persisted subscription record
//! - **Admin CRUD**: plants, contact info, pricing tiers, site settings,
//!   image uploads
//!
//! Built on Axum over the `verdex-core` engine; durable local state lives
//! in a JSON document under the data directory.

use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use verdex_config::{ConfigLoad, ConfigLoader};
use verdex_server::{AppState, create_app};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "verdex-server")]
#[command(about = "Plant catalog and subscription service")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Data directory for durable state and uploads (overrides config)
    #[arg(long, env = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON catalog file replacing the built-in seed
    #[arg(long, env = "SEED_FILE")]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Quieter defaults; override via RUST_LOG.
                "info,tower_http=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ConfigLoad {
        mut config,
        warnings,
    } = ConfigLoader::new()
        .load()
        .context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(seed_file) = cli.seed_file {
        config.seed_file = Some(seed_file);
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState::initialize(Arc::new(config))
        .await
        .context("failed to initialize application state")?;

    info!(
        catalog = state.catalog.len().await,
        data_dir = %state.config.data_dir.display(),
        "state initialized"
    );

    // Periodic sweep: expire stale payment attempts, drop abandoned sessions.
    let sweeper_state = state.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(30));
        loop {
            tick.tick().await;
            sweeper_state.sweep_checkouts().await;
        }
    });

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "verdex-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for shutdown signal");
    }
}
