//! Placeholder login page surfacing the error indicator query contract.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
}

/// Maps a known error indicator to its user-facing message.
///
/// Unknown indicators are ignored rather than echoed back into the page.
fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "invalid-partner-link" => Some("That partner link is invalid or incomplete."),
        "invalid-token" => Some("That partner link has expired or was already used."),
        "signin-failed" => Some("Sign-in could not be completed. Please request a new link."),
        "system-error" => Some("Something went wrong on our side. Please try again."),
        _ => None,
    }
}

/// Renders the minimal login page.
///
/// # Endpoint
///
/// `GET /app/login` and `GET /home/login` (reached as `/login` through the
/// rewrite). Accepts the `error` query parameter with one of
/// `invalid-partner-link`, `invalid-token`, `signin-failed`, `system-error`.
pub async fn login_handler(Query(query): Query<LoginQuery>) -> Html<String> {
    let notice = query
        .error
        .as_deref()
        .and_then(error_message)
        .map(|message| format!("<p class=\"error\">{message}</p>"))
        .unwrap_or_default();

    Html(format!(
        "<!doctype html><html><body><h1>Sign in</h1>{notice}</body></html>"
    ))
}
