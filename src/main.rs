//! Memo API - Main Entry Point

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use memo_api::infrastructure::driven_adapters::config::AppConfig;
use memo_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use memo_api::infrastructure::driven_adapters::{PostgresMemoRepository, PostgresUserRepository};
use memo_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};
use memo_api::shared::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    logging::init(&config.logging).context("failed to initialize logging")?;
    tracing::info!(format = ?config.logging.format, "Configuration loaded");

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to the database")?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await.context("failed to run migrations")?;
    tracing::info!("Database migrations completed");

    let memo_repository = Arc::new(PostgresMemoRepository::new(pool.clone()));
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

    let app = build_router(AppState::new(memo_repository, user_repository));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
