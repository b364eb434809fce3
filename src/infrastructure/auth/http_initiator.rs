//! HTTP adapter for the session-initiation capability.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use crate::domain::capabilities::SessionInitiator;
use crate::domain::entities::SessionStart;
use crate::error::{AppError, map_reqwest_error};

/// Provider identifier for the passwordless email flow.
const PROVIDER: &str = "email";

#[derive(Serialize)]
struct SignInRequest<'a> {
    provider: &'a str,
    email: &'a str,
    /// Always `false`: the gateway performs its own navigation.
    redirect: bool,
    #[serde(rename = "callbackUrl")]
    callback_url: &'a str,
}

/// Starts sessions through the identity subsystem's sign-in endpoint.
pub struct HttpSessionInitiator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionInitiator {
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SessionInitiator for HttpSessionInitiator {
    async fn start_session(
        &self,
        email: &str,
        callback_url: &str,
    ) -> Result<SessionStart, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SignInRequest {
                provider: PROVIDER,
                email,
                redirect: false,
                callback_url,
            })
            .send()
            .await
            .map_err(|e| map_reqwest_error(&self.endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(
                "Session initiation endpoint returned an error status",
                json!({ "endpoint": self.endpoint, "status": status.as_u16() }),
            ));
        }

        response
            .json::<SessionStart>()
            .await
            .map_err(|e| map_reqwest_error(&self.endpoint, e))
    }
}
