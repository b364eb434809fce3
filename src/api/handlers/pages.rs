//! Placeholder content handlers for the rewritten trees.
//!
//! Page rendering is out of scope for the gateway; these handlers answer with
//! enough structure for tests and downstream consumers to observe which tree
//! served a request and with what path and query.

use axum::Json;
use axum::extract::OriginalUri;
use serde_json::{Value, json};

/// Serves the authenticated application tree (`/app...`).
pub async fn app_page_handler(OriginalUri(uri): OriginalUri) -> Json<Value> {
    Json(json!({
        "tree": "app",
        "path": uri.path(),
        "query": uri.query(),
    }))
}

/// Serves the root/marketing tree (`/home...`).
pub async fn home_page_handler(OriginalUri(uri): OriginalUri) -> Json<Value> {
    Json(json!({
        "tree": "home",
        "path": uri.path(),
        "query": uri.query(),
    }))
}

/// Serves tenant trees; the first path segment is the hostname the rewrite
/// prepended.
pub async fn tenant_page_handler(OriginalUri(uri): OriginalUri) -> Json<Value> {
    let mut segments = uri.path().trim_start_matches('/').splitn(2, '/');
    let tenant = segments.next().unwrap_or_default();
    let path = segments
        .next()
        .map(|rest| format!("/{rest}"))
        .unwrap_or_else(|| "/".to_string());

    Json(json!({
        "tree": "tenant",
        "tenant": tenant,
        "path": path,
        "query": uri.query(),
    }))
}
