//! HTTP adapter for the token-verification endpoint.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use crate::domain::capabilities::TokenVerifier;
use crate::domain::entities::TokenVerification;
use crate::error::{AppError, map_reqwest_error};

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
    email: &'a str,
}

/// Verifies partner tokens against the identity subsystem over HTTP.
///
/// `POST {token, email}` to the configured endpoint; the response body is
/// `{valid, redirectUrl?}`. Non-2xx statuses and malformed bodies are call
/// failures, not negative answers.
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTokenVerifier {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str, email: &str) -> Result<TokenVerification, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&VerifyRequest { token, email })
            .send()
            .await
            .map_err(|e| map_reqwest_error(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                "Token verification endpoint returned an error status",
                json!({ "endpoint": self.endpoint, "status": status.as_u16() }),
            ));
        }

        response
            .json::<TokenVerification>()
            .await
            .map_err(|e| map_reqwest_error(&self.endpoint, e))
    }
}
