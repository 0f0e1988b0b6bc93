//! Eligibility API Server Binary
//!
//! Starts the HTTP API that serves insurance classifications, renewal
//! worklists and reports.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin eligibility-api
//!
//! # Run with environment variables
//! API_PORT=8080 API_TIMEZONE=America/Chicago cargo run --bin eligibility-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_TIMEZONE` - IANA timezone for requests that omit one (default: UTC)
//! * `API_INSURANCE_HORIZON_DAYS` - Insurance "expiring soon" window (default: 30)
//! * `API_CERTIFICATION_HORIZON_DAYS` - Certification renewal window (default: 30)
//! * `API_URGENT_LIMIT` - Urgent insurance cases on the dashboard (default: 3)
//! * `API_REPORT_HORIZON_DAYS` - Expiring certifications report window (default: 90)

use std::net::SocketAddr;

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load API configuration")?;

    init_tracing(&config.log_level);

    // Fail at startup rather than on the first request
    config
        .default_timezone()
        .context("API_TIMEZONE is not a known IANA timezone")?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone,
        insurance_horizon_days = config.insurance_horizon_days,
        certification_horizon_days = config.certification_horizon_days,
        "Starting Eligibility API Server"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
