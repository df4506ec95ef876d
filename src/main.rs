//! Investor Profile API server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investor_profile::adapters::http::{api_router, AppState};
use investor_profile::adapters::postgres::{
    self, PostgresProfileRepository, PostgresUserRepository,
};
use investor_profile::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let pool = postgres::connect(&config.database).await?;
    let state = AppState::new(
        Arc::new(PostgresProfileRepository::new(pool.clone())),
        Arc::new(PostgresUserRepository::new(pool.clone())),
    );

    if config.database.seed_on_startup {
        state.catalog.seed_defaults().await?;
    }

    let addr = config.server.socket_addr()?;
    let app = api_router(state, &config.server)?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| server.log_level.clone().into());

    if server.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
