//! Partner token verification capability.

use async_trait::async_trait;

use crate::domain::entities::TokenVerification;
use crate::error::AppError;

/// Verifies a one-time partner (token, email) pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::HttpTokenVerifier`] - POSTs the pair to
///   the identity subsystem's verification endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Checks the pair and returns its validity plus an optional preferred
    /// post-login destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the verification call itself fails
    /// (transport error, non-2xx status, malformed body). A well-formed
    /// negative answer is `Ok` with `valid: false`.
    async fn verify(&self, token: &str, email: &str) -> Result<TokenVerification, AppError>;
}
