//! Session-read capability consumed by the hostname router.

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::domain::entities::Session;
use crate::error::AppError;

/// Reads an optional session from request headers. No side effects.
///
/// The router folds any error from this capability into "no session" (fail
/// closed toward requiring login), so implementations are free to report read
/// failures without affecting routing semantics.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::CookieSessionStore`] - verifies the
///   signed session cookie locally with the shared secret
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Returns the session carried by the request, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session source cannot be read at
    /// all; callers treat this the same as an absent session.
    async fn read_session(&self, headers: &HeaderMap) -> Result<Option<Session>, AppError>;
}
