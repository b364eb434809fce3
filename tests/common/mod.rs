#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use serde_json::json;
use tenant_gateway::application::services::SignInService;
use tenant_gateway::domain::capabilities::{SessionInitiator, SessionReader, TokenVerifier};
use tenant_gateway::domain::entities::{Session, SessionStart, TokenVerification};
use tenant_gateway::domain::routing::RouterRules;
use tenant_gateway::error::AppError;
use tenant_gateway::state::AppState;

/// Session reader that always answers the same thing.
pub struct StaticSessionReader(pub Option<Session>);

#[async_trait]
impl SessionReader for StaticSessionReader {
    async fn read_session(&self, _headers: &HeaderMap) -> Result<Option<Session>, AppError> {
        Ok(self.0.clone())
    }
}

/// Session reader whose reads always fail; the router must fold this into
/// "no session".
pub struct FailingSessionReader;

#[async_trait]
impl SessionReader for FailingSessionReader {
    async fn read_session(&self, _headers: &HeaderMap) -> Result<Option<Session>, AppError> {
        Err(AppError::internal("session source unavailable", json!({})))
    }
}

/// Scripted answer of the stub token verifier.
#[derive(Clone)]
pub enum Verdict {
    Valid(Option<String>),
    Invalid,
    CallFails,
}

pub struct StubVerifier {
    pub verdict: Verdict,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TokenVerifier for StubVerifier {
    async fn verify(&self, _token: &str, _email: &str) -> Result<TokenVerification, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.verdict {
            Verdict::Valid(redirect_url) => Ok(TokenVerification {
                valid: true,
                redirect_url: redirect_url.clone(),
            }),
            Verdict::Invalid => Ok(TokenVerification {
                valid: false,
                redirect_url: None,
            }),
            Verdict::CallFails => Err(AppError::upstream("verification unreachable", json!({}))),
        }
    }
}

/// Scripted answer of the stub session initiator.
#[derive(Clone)]
pub enum StartResult {
    Usable,
    NoUrl,
    CallFails,
}

pub struct StubInitiator {
    pub result: StartResult,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SessionInitiator for StubInitiator {
    async fn start_session(
        &self,
        _email: &str,
        callback_url: &str,
    ) -> Result<SessionStart, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            StartResult::Usable => Ok(SessionStart {
                url: Some(format!("https://app.example.com/callback?to={callback_url}")),
            }),
            StartResult::NoUrl => Ok(SessionStart::default()),
            StartResult::CallFails => Err(AppError::upstream("sign-in unreachable", json!({}))),
        }
    }
}

pub fn test_session() -> Session {
    Session {
        email: "user@example.com".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

pub fn test_rules() -> RouterRules {
    RouterRules::new("example.com", 3000)
}

/// Builds state with a fixed session answer and scripted identity stubs,
/// returning the call counters for both outbound capabilities.
pub fn create_test_state(
    session: Option<Session>,
    verdict: Verdict,
    start: StartResult,
) -> (AppState, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let verify_calls = Arc::new(AtomicUsize::new(0));
    let start_calls = Arc::new(AtomicUsize::new(0));

    let signin = SignInService::new(
        Arc::new(StubVerifier {
            verdict,
            calls: verify_calls.clone(),
        }),
        Arc::new(StubInitiator {
            result: start,
            calls: start_calls.clone(),
        }),
    );

    let state = AppState::new(
        test_rules(),
        Arc::new(StaticSessionReader(session)),
        Arc::new(signin),
    );

    (state, verify_calls, start_calls)
}
