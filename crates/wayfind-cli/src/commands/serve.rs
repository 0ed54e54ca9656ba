//! Serve command implementation.
//!
//! Opens the persisted graph (seeding the demo floor into an empty store when
//! enabled) and serves the REST API under `/api`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use wayfind_api::create_app;
use wayfind_ops::{Config, NavContext};

/// Run the HTTP server until interrupted.
pub async fn execute(config: &Config) -> Result<()> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind))?;

    let ctx = NavContext::open(config)?;
    let stats = ctx.stats().await;
    info!(
        floor_plans = stats.floor_plans,
        points = stats.points,
        edges = stats.edges,
        "Graph ready"
    );

    let app = create_app(ctx);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Serving Wayfind API at http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
