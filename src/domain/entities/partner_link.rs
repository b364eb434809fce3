//! Partner link token and the sign-in flow's wire shapes and error taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// A one-time emailed link carrying a token and email, used to establish a
/// session without a password.
///
/// Both fields must be present and non-empty for the flow to proceed;
/// otherwise the flow fails closed immediately.
#[derive(Debug, Clone, Default)]
pub struct PartnerLink {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl PartnerLink {
    pub fn new(token: Option<String>, email: Option<String>) -> Self {
        Self { token, email }
    }

    /// Returns the (token, email) pair when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.token.as_deref(), self.email.as_deref()) {
            (Some(token), Some(email)) if !token.is_empty() && !email.is_empty() => {
                Some((token, email))
            }
            _ => None,
        }
    }
}

/// Response of the token-verification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenVerification {
    pub valid: bool,
    /// Preferred post-login destination supplied by the verifier.
    #[serde(rename = "redirectUrl")]
    pub redirect_url: Option<String>,
}

/// Result of the session-initiation capability. A populated `url` signals a
/// usable session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStart {
    pub url: Option<String>,
}

impl SessionStart {
    pub fn succeeded(&self) -> bool {
        self.url.is_some()
    }
}

/// Terminal failures of the partner sign-in flow.
///
/// Each maps to the error indicator carried to the login page; none is
/// retried automatically, the user must request a new link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("partner link is missing its token or email")]
    InvalidPartnerLink,
    #[error("token verification rejected the partner token")]
    InvalidToken,
    #[error("session initiation did not produce a usable session")]
    SigninFailed,
    #[error("token verification call failed")]
    SystemError,
}

impl SignInError {
    /// Error indicator for the login page query contract.
    pub fn query_code(self) -> &'static str {
        match self {
            Self::InvalidPartnerLink => "invalid-partner-link",
            Self::InvalidToken => "invalid-token",
            Self::SigninFailed => "signin-failed",
            Self::SystemError => "system-error",
        }
    }
}
