mod app;
mod handlers;
mod models;
mod services;
mod utils;

use anyhow::Context;
use app::config::Config;
use app::router::build_router;
use app::state::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    for name in config.missing_credentials() {
        warn!("{} is not set, outbound calls will be rejected", name);
    }
    // Webhooks chegam sem verificação de assinatura
    warn!("ASAAS webhook authenticity is not verified");

    let state = AppState::from_config(&config).context("failed to build HTTP client")?;
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Servidor online na porta {}", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
