mod config;
mod error;
mod placeholder;
mod relay;
mod routes;
mod state;

use config::{Config, Credentials};
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::from_env();
    let cfg = Config::load()?;

    let state = Arc::new(AppState::from_config(&cfg, credentials)?);

    let prefix = cfg
        .route_prefix
        .as_deref()
        .unwrap_or(routes::DEFAULT_ROUTE_PREFIX);
    let app = routes::build_router(state, prefix);

    let host_port = std::env::var(config::HOST_PORT_VAR).ok();
    let listen = cfg.listen_addr(host_port.as_deref());
    let addr: SocketAddr = listen
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", listen, e))?;
    info!(%addr, "Starting databricks-gateway");

    let server = axum::Server::bind(&addr).serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
