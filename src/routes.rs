//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/health`               - Health check (never rewritten)
//! - `/app/*`                        - Authenticated application tree
//! - `/home/*`                       - Root/marketing tree
//! - `/{hostname}/*`                 - Tenant trees (root fallback)
//!
//! Clients never address `/app`, `/home`, or the tenant prefixes directly;
//! the boundary rewrite middleware maps external hostnames onto them. Both
//! the app and home trees expose `/login` and `/auth/partner-signin`.
//!
//! # Middleware
//!
//! - **Rewrite** - hostname classification and session gating, before routing
//! - **Tracing** - structured request/response logging (outermost)

use axum::routing::get;
use axum::{Router, middleware};

use crate::api::handlers::{
    app_page_handler, health_handler, home_page_handler, login_handler, partner_signin_handler,
    tenant_page_handler,
};
use crate::api::middleware::{rewrite, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let app_pages = Router::new()
        .route("/login", get(login_handler))
        .route("/auth/partner-signin", get(partner_signin_handler))
        .fallback(app_page_handler);

    let home_pages = Router::new()
        .route("/login", get(login_handler))
        .route("/auth/partner-signin", get(partner_signin_handler))
        .fallback(home_page_handler);

    Router::new()
        .route("/api/health", get(health_handler))
        .nest("/app", app_pages)
        .nest("/home", home_pages)
        .fallback(tenant_page_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rewrite::layer,
        ))
        .layer(tracing::layer())
        .with_state(state)
}
