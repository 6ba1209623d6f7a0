//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients, the shared state and the Axum server, and
//! runs it until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::backend::HttpRegistrationBackend;
use crate::infrastructure::identity::IdentityToolkitClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend registration client
/// - Identity Toolkit client
/// - Form registry
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let timeout = config.http_timeout();

    let backend = HttpRegistrationBackend::new(&config.api_url, timeout)
        .context("Failed to build backend client")?;
    let identity =
        IdentityToolkitClient::new(&config.identity_url, &config.identity_api_key, timeout)
            .context("Failed to build identity provider client")?;
    tracing::info!("Upstream clients ready");

    let state = AppState::new(
        Arc::new(backend),
        Arc::new(identity),
        config.registration_form_capacity,
        &config.share_host,
        config.secure_cookies,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
