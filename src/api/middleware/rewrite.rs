//! Boundary middleware applying the hostname router to every request.
//!
//! Runs before route matching: it either passes the request through,
//! answers with a redirect, or swaps the request URI for the rewritten
//! internal path and lets the inner router serve it.

use std::sync::LazyLock;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;

use crate::domain::routing::{self, HostClass, RoutingDecision};
use crate::state::AppState;

/// Single path segment with a file extension (e.g. `/favicon.ico`).
static FILE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/[\w-]+\.\w+$").unwrap());

/// Path prefixes the router never touches.
const SKIP_PREFIXES: [&str; 4] = ["/api/", "/_next/", "/_static/", "/_vercel"];

/// Returns true for paths outside the router's match rule.
fn matcher_excluded(path: &str) -> bool {
    SKIP_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || FILE_SEGMENT.is_match(path)
}

fn host_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Classifies the request by hostname and applies the routing decision.
///
/// - Matcher-excluded paths, font assets, and requests without a usable
///   `Host` header pass through untouched.
/// - The session is read only for app-subdomain requests; a session-read
///   failure is folded into "no session" (fail closed toward `/login`).
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if matcher_excluded(&path) {
        return next.run(req).await;
    }
    // Before hostname classification, so font requests never pay the
    // session-lookup cost
    if routing::is_font_asset(&path) {
        return next.run(req).await;
    }

    let Some(host) = host_header(req.headers()) else {
        return next.run(req).await;
    };

    let hostname = routing::effective_hostname(&st.rules, &host);
    let has_session = match routing::classify_hostname(&st.rules, &hostname) {
        HostClass::App => match st.sessions.read_session(req.headers()).await {
            Ok(session) => session.is_some(),
            Err(e) => {
                tracing::debug!(error = ?e, "session read failed; treating as no session");
                false
            }
        },
        _ => false,
    };

    let query = req.uri().query().map(str::to_string);
    match routing::decide(&st.rules, &host, &path, query.as_deref(), has_session) {
        RoutingDecision::PassThrough => next.run(req).await,
        RoutingDecision::Redirect(location) => Redirect::temporary(&location).into_response(),
        RoutingDecision::Rewrite(target) => match Uri::try_from(target.as_str()) {
            Ok(uri) => {
                *req.uri_mut() = uri;
                next.run(req).await
            }
            Err(e) => {
                tracing::warn!(target, error = %e, "rewrite target is not a valid URI");
                next.run(req).await
            }
        },
    }
}
