//! # User Auth API Server
//!
//! Entry point: logging, configuration, state, then the HTTP server.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_auth_api::build_router;
use user_auth_api::config::Config;
use user_auth_api::state::AppState;

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads and validates configuration from environment variables
/// 3. Connects to the database and runs migrations
/// 4. Serves HTTP until Ctrl-C or SIGTERM
/// 5. Closes the database pool
#[tokio::main]
async fn main() -> Result<()> {
    // Default: info for dependencies, debug for this crate.
    // Override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_auth_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Secrets are redacted by Config's Debug impl
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Connected to database");

    let app = build_router(app_state.clone(), &config);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    app_state.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
