mod api_doc;
mod config;
mod error;
mod handlers;
mod path;
mod record;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_util;

use anyhow::Context;
use config::Config;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.debug);

    tracing::info!("rust-memory-kv starting");
    config.log_startup();

    let host = config.service_host.clone();
    let port = config.service_port;

    let state = AppState::new(config);
    let app = routes::build_router(state.clone());

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    let databases = state.store.database_names().await;
    tracing::info!("Server stopped, discarding {} database(s)", databases.len());

    Ok(())
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` when the debug flag is set.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
