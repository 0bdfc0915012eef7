//! Quote Store Binary
//!
//! Starts the quote store HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin quote-store
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP port (default: 3000)
//! - `BIND_ADDRESS`: listen address (default: 0.0.0.0)
//! - `MAX_BODY_BYTES`: request body limit (default: 102400)
//! - `QUOTE_ID_STRATEGY`: `sequence` or `length` (default: sequence)
//! - `METRICS_ENABLED`: serve Prometheus metrics at `/metrics` (default: true)
//! - `LOG_ANSI`: colored log output (default: false)
//! - `RUST_LOG`: log level (default: info)

use std::sync::Arc;

use anyhow::Context;
use quote_store::application::use_cases::ManageQuotesUseCase;
use quote_store::config::ServiceConfig;
use quote_store::infrastructure::http::{AppState, create_router};
use quote_store::infrastructure::persistence::InMemoryQuoteRepository;
use quote_store::observability::init_metrics;
use quote_store::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = ServiceConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.logging);

    tracing::info!("Starting Quote Store");
    log_config(&config);

    if config.metrics.enabled {
        init_metrics().context("failed to install metrics recorder")?;
    }

    let repo = Arc::new(InMemoryQuoteRepository::new(config.store.id_strategy));
    let quotes = Arc::new(ManageQuotesUseCase::new(repo));
    let state = AppState::new(quotes, env!("CARGO_PKG_VERSION"))
        .with_body_limit(config.server.max_body_bytes);
    let app = create_router(state);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server is running on port {}", config.server.port);

    let shutdown_token = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown_token.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_token.cancelled_owned())
        .await
        .context("HTTP server error")?;

    tracing::info!("Quote Store shutdown complete");
    Ok(())
}

/// Load environment variables from a `.env` file in the working directory or
/// the nearest ancestor that has one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        for dir in cwd.ancestors().skip(1) {
            let env_path = dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
        }
    }
}

fn log_config(config: &ServiceConfig) {
    tracing::info!(
        bind_address = %config.server.bind_address,
        port = config.server.port,
        max_body_bytes = config.server.max_body_bytes,
        id_strategy = %config.store.id_strategy,
        metrics_enabled = config.metrics.enabled,
        "Configuration loaded"
    );
}

/// Wait for Ctrl+C or SIGTERM, then cancel `token`.
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    token.cancel();
}
