//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /api/health` - under `/api/` so the rewrite matcher never touches it.
///
/// The gateway holds no connections of its own; liveness is the only check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
