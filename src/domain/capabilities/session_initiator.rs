//! Session-initiation capability.

use async_trait::async_trait;

use crate::domain::entities::SessionStart;
use crate::error::AppError;

/// Starts a session for an email address through the external identity
/// subsystem, requesting no automatic redirect.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HttpSessionInitiator`] - calls the
///   identity subsystem's sign-in endpoint with the `email` provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionInitiator: Send + Sync {
    /// Requests a session for `email`, carrying the preferred post-login
    /// destination as the callback URL.
    ///
    /// A [`SessionStart`] without a `url` means the subsystem declined to
    /// issue a session; that is a flow failure but not a call error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the call itself fails.
    async fn start_session(&self, email: &str, callback_url: &str)
    -> Result<SessionStart, AppError>;
}
