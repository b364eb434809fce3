//! Cookie-based session reading with local signature verification.

use async_trait::async_trait;
use axum::http::{HeaderMap, header::COOKIE};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::domain::capabilities::SessionReader;
use crate::domain::entities::Session;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried inside the signed session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    email: String,
    /// Expiry as Unix seconds.
    exp: i64,
}

/// Reads the session cookie and verifies it locally with the shared secret.
///
/// # Cookie Format
///
/// ```text
/// Cookie: <name>=<base64url(claims-json)>.<hex(hmac-sha256)>
/// ```
///
/// The MAC is computed over the base64 payload, keyed by the auth secret the
/// identity subsystem signs with. Tampered, malformed, or expired cookies all
/// read as "no session"; the gateway never distinguishes them.
pub struct CookieSessionStore {
    cookie_name: String,
    secret: String,
}

impl CookieSessionStore {
    /// # Arguments
    ///
    /// - `cookie_name` - name of the session cookie
    /// - `secret` - shared HMAC key; must match the issuing subsystem's
    pub fn new(cookie_name: String, secret: String) -> Self {
        Self {
            cookie_name,
            secret,
        }
    }

    /// Extracts the session cookie value from the `Cookie` header, ignoring
    /// other cookies.
    fn cookie_value(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get(COOKIE)
            .and_then(|cookie_header| cookie_header.to_str().ok())
            .and_then(|cookie_str| {
                cookie_str.split(';').find_map(|cookie| {
                    let mut parts = cookie.trim().splitn(2, '=');
                    match (parts.next(), parts.next()) {
                        (Some(name), Some(value)) if name == self.cookie_name => {
                            Some(value.to_string())
                        }
                        _ => None,
                    }
                })
            })
    }

    /// Verifies signature and expiry, yielding the session on success.
    fn verify(&self, raw: &str) -> Option<Session> {
        let (payload_b64, mac_hex) = raw.rsplit_once('.')?;

        let mac_bytes = hex::decode(mac_hex).ok()?;
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&mac_bytes).ok()?;

        let payload = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let claims: SessionClaims = serde_json::from_slice(&payload).ok()?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)?;
        let session = Session {
            email: claims.email,
            expires_at,
        };
        if session.is_expired() {
            return None;
        }
        Some(session)
    }

    /// Signs claims into a cookie value. Only tests mint cookies; the gateway
    /// itself never issues sessions.
    #[cfg(test)]
    fn encode(&self, claims: &SessionClaims) -> String {
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload_b64.as_bytes());
        format!("{payload_b64}.{}", hex::encode(mac.finalize().into_bytes()))
    }
}

#[async_trait]
impl SessionReader for CookieSessionStore {
    async fn read_session(&self, headers: &HeaderMap) -> Result<Option<Session>, AppError> {
        Ok(self
            .cookie_value(headers)
            .and_then(|value| self.verify(&value)))
    }
}
