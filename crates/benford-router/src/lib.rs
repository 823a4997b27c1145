//! Benford Router
//!
//! HTTP boundary for the Benford analysis core. Accepts text over JSON,
//! runs the conformance test and renders results or classified errors.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RouterConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Does nothing if a
/// subscriber is already installed.
pub fn init_tracing(config: &RouterConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the Router HTTP server
///
/// Validates configuration, initializes tracing and serves until Ctrl-C.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    config.validate()?;
    init_tracing(&config);

    info!("Starting Benford Router");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Default significance level: {}",
        config.default_significance_level
    );
    info!("Max body size: {} bytes", config.max_body_bytes);

    let bind_addr = config.bind_addr();
    let app = create_router(AppState::new(config));

    // Bind and serve
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Router listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    info!("Router stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
