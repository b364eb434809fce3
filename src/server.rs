//! HTTP server initialization and runtime setup.
//!
//! Wires the concrete identity adapters into shared state and runs the Axum
//! server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;

use crate::application::services::SignInService;
use crate::config::Config;
use crate::domain::capabilities::{SessionInitiator, SessionReader, TokenVerifier};
use crate::domain::routing::RouterRules;
use crate::infrastructure::auth::{CookieSessionStore, HttpSessionInitiator, HttpTokenVerifier};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Session cookie verification (shared secret)
/// - Outbound HTTP client for the identity subsystem
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let client = reqwest::Client::new();

    let sessions: Arc<dyn SessionReader> = Arc::new(CookieSessionStore::new(
        config.session_cookie.clone(),
        config.auth_secret.clone(),
    ));
    let verifier: Arc<dyn TokenVerifier> = Arc::new(HttpTokenVerifier::new(
        client.clone(),
        config.token_verify_url.clone(),
    ));
    let initiator: Arc<dyn SessionInitiator> = Arc::new(HttpSessionInitiator::new(
        client,
        config.session_signin_url.clone(),
    ));

    let state = AppState::new(
        RouterRules::new(config.root_domain.clone(), config.dev_port),
        sessions,
        Arc::new(SignInService::new(verifier, initiator)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C, letting in-flight requests
/// drain before the server exits.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install shutdown signal handler");
        // Without a handler there is no signal to wait for; keep serving
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
