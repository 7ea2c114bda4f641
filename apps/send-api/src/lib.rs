//! Send API
//!
//! An authenticated HTTP endpoint that relays JSON mail requests to an SMTP
//! transport.
//!
//! ## Architecture
//!
//! ```text
//! POST /send (JSON payload + bearer token)
//!   ↓ (validates + resolves defaults)
//! domain_mailer::SendEmailRequest::resolve
//!   ↓ (builds MIME message)
//! domain_mailer::message::build
//!   ↓ (raw bytes + envelope)
//! MailTransport::send_raw (SMTP)
//!   ↓
//! Email Delivery
//! ```
//!
//! Each request is handled independently and atomically: validate, build,
//! send, respond. No state survives a request.

pub mod api;
pub mod config;
pub mod state;

use std::sync::Arc;

use core_config::FromEnv;
use core_config::tracing::init_tracing;
use domain_mailer::{MailTransport, SmtpTransport};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use config::Config;
use state::AppState;

/// Run the send API.
///
/// This is the main entry point for the service. It:
/// 1. Loads configuration from the environment (fails fast without AUTH_TOKEN)
/// 2. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 3. Wires the SMTP delivery transport
/// 4. Serves the router with graceful shutdown handling
///
/// # Errors
///
/// Returns an error if configuration is incomplete, the SMTP transport
/// cannot be constructed, or the listener fails to bind.
pub async fn run() -> Result<()> {
    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    info!(
        name = %config.app.name,
        version = %config.app.version,
        "Starting send API"
    );
    info!("Environment: {:?}", config.environment);

    let transport =
        SmtpTransport::from_env().wrap_err("Failed to initialize the SMTP transport")?;
    info!(transport = transport.name(), "Delivery transport ready");

    let state = AppState::new(config, Arc::new(transport));
    let addr = state.config.server.address();
    let app = api::routes(state);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;
    info!("Send API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    info!("Send API stopped");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        },
    }
}
