//! Partner sign-in flow: verify a one-time link, then start a session.
//!
//! The flow is a small state machine with one-directional transitions
//! (`loading → signing-in`, or either into the terminal `error`) and a
//! strictly ordered two-step handshake: session initiation is never attempted
//! until token verification has succeeded. The two calls are sequential,
//! never concurrent.

use std::sync::Arc;

use crate::domain::capabilities::{SessionInitiator, TokenVerifier};
use crate::domain::entities::{PartnerLink, SignInError};

/// Destination used when the verifier supplies no preferred one.
pub const DEFAULT_DESTINATION: &str = "/app?welcome=partner";

/// User-visible progress states of one flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStatus {
    Loading,
    SigningIn,
    Error,
}

/// State of one sign-in flow instance.
///
/// Owned exclusively by the running instance; transitions are guarded so that
/// a torn-down flow (`cancel`) never changes state again, and the network
/// sequence fires at most once per instance (`begin` latch).
#[derive(Debug)]
pub struct SignInFlow {
    status: FlowStatus,
    begun: bool,
    cancelled: bool,
}

impl SignInFlow {
    pub fn new() -> Self {
        Self {
            status: FlowStatus::Loading,
            begun: false,
            cancelled: false,
        }
    }

    pub fn status(&self) -> FlowStatus {
        self.status
    }

    /// Latches the instance as started. Returns `false` if the flow already
    /// ran or was torn down; callers must not issue any call in that case.
    pub fn begin(&mut self) -> bool {
        if self.cancelled || self.begun {
            return false;
        }
        self.begun = true;
        true
    }

    /// Marks the instance as torn down. Every state change attempted
    /// afterwards is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Attempts a transition, returning whether it was applied.
    ///
    /// Legal transitions are `loading → signing-in`, `loading → error`, and
    /// `signing-in → error`; `error` is terminal and nothing returns to
    /// `loading`.
    pub fn transition(&mut self, next: FlowStatus) -> bool {
        if self.cancelled {
            return false;
        }
        let legal = matches!(
            (self.status, next),
            (FlowStatus::Loading, FlowStatus::SigningIn)
                | (FlowStatus::Loading, FlowStatus::Error)
                | (FlowStatus::SigningIn, FlowStatus::Error)
        );
        if legal {
            self.status = next;
        }
        legal
    }
}

impl Default for SignInFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal result of one flow instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Navigate to the preferred post-login destination.
    Success { destination: String },
    /// Navigate to the login page carrying the error indicator.
    Failed(SignInError),
}

/// Drives the partner sign-in handshake against the external capabilities.
pub struct SignInService {
    verifier: Arc<dyn TokenVerifier>,
    initiator: Arc<dyn SessionInitiator>,
}

impl SignInService {
    pub fn new(verifier: Arc<dyn TokenVerifier>, initiator: Arc<dyn SessionInitiator>) -> Self {
        Self { verifier, initiator }
    }

    /// Runs one flow instance to its terminal outcome.
    ///
    /// Returns `None` without issuing any call when the instance already ran
    /// or was cancelled, and mid-flight when a guarded transition is refused
    /// after teardown.
    pub async fn run(&self, flow: &mut SignInFlow, link: &PartnerLink) -> Option<FlowOutcome> {
        if !flow.begin() {
            return None;
        }

        let Some((token, email)) = link.credentials() else {
            flow.transition(FlowStatus::Error);
            return Some(FlowOutcome::Failed(SignInError::InvalidPartnerLink));
        };

        let verification = match self.verifier.verify(token, email).await {
            Ok(verification) => verification,
            Err(e) => {
                tracing::warn!(email, error = ?e, "partner token verification call failed");
                flow.transition(FlowStatus::Error);
                return Some(FlowOutcome::Failed(SignInError::SystemError));
            }
        };

        if !verification.valid {
            flow.transition(FlowStatus::Error);
            return Some(FlowOutcome::Failed(SignInError::InvalidToken));
        }

        if !flow.transition(FlowStatus::SigningIn) {
            // Torn down while the verification call was in flight
            return None;
        }

        let destination = verification
            .redirect_url
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

        match self.initiator.start_session(email, &destination).await {
            Ok(start) if start.succeeded() => Some(FlowOutcome::Success { destination }),
            Ok(_) => {
                flow.transition(FlowStatus::Error);
                Some(FlowOutcome::Failed(SignInError::SigninFailed))
            }
            Err(e) => {
                tracing::warn!(email, error = ?e, "session initiation failed");
                flow.transition(FlowStatus::Error);
                Some(FlowOutcome::Failed(SignInError::SigninFailed))
            }
        }
    }
}
