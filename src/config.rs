//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! The router never reads the environment ad hoc; the resolved values are injected
//! through [`crate::state::AppState`].
//!
//! ## Required Variables
//!
//! - `ROOT_DOMAIN` - base domain under which tenant subdomains are issued
//!   (e.g. `example.com`); the authenticated app lives at `app.<ROOT_DOMAIN>`
//! - `AUTH_SECRET` - shared secret used to verify session cookie signatures
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DEV_PORT` - Port used for `*.localhost:<port>` local subdomain testing
//!   (default: `3000`)
//! - `SESSION_COOKIE` - Name of the session cookie (default: `session_token`)
//! - `TOKEN_VERIFY_URL` - Partner token verification endpoint
//!   (default: `http://localhost:3000/api/auth/verify-partner-token`)
//! - `SESSION_SIGNIN_URL` - Session initiation endpoint
//!   (default: `http://localhost:3000/api/auth/signin`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base domain for hostname classification (e.g. `example.com`).
    pub root_domain: String,
    /// Shared secret used by the session cookie verifier.
    /// Loaded from `AUTH_SECRET`. Must be non-empty.
    pub auth_secret: String,
    /// Name of the cookie carrying the signed session token.
    pub session_cookie: String,
    /// Endpoint receiving `POST {token, email}` for partner link verification.
    pub token_verify_url: String,
    /// Endpoint receiving session initiation requests for the `email` provider.
    pub session_signin_url: String,
    pub listen_addr: String,
    /// Port substituted in `.localhost:<port>` hostnames during local
    /// multi-subdomain testing.
    pub dev_port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROOT_DOMAIN` or `AUTH_SECRET` is missing, or if
    /// `DEV_PORT` is set but not a port number.
    pub fn from_env() -> Result<Self> {
        let root_domain = env::var("ROOT_DOMAIN").context("ROOT_DOMAIN must be set")?;
        let auth_secret = env::var("AUTH_SECRET").context("AUTH_SECRET must be set")?;

        let session_cookie =
            env::var("SESSION_COOKIE").unwrap_or_else(|_| "session_token".to_string());

        let token_verify_url = env::var("TOKEN_VERIFY_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/auth/verify-partner-token".to_string());
        let session_signin_url = env::var("SESSION_SIGNIN_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api/auth/signin".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let dev_port = match env::var("DEV_PORT") {
            Ok(v) => v.parse().context("DEV_PORT must be a port number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            root_domain,
            auth_secret,
            session_cookie,
            token_verify_url,
            session_signin_url,
            listen_addr,
            dev_port,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root_domain` is empty or carries a scheme or path
    /// - `auth_secret` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an endpoint URL is not absolute HTTP(S)
    pub fn validate(&self) -> Result<()> {
        if self.root_domain.is_empty() {
            anyhow::bail!("ROOT_DOMAIN must not be empty");
        }
        if self.root_domain.contains("://") || self.root_domain.contains('/') {
            anyhow::bail!(
                "ROOT_DOMAIN must be a bare domain, got '{}'",
                self.root_domain
            );
        }

        if self.auth_secret.is_empty() {
            anyhow::bail!("AUTH_SECRET must not be empty");
        }

        if self.session_cookie.is_empty() {
            anyhow::bail!("SESSION_COOKIE must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, url) in [
            ("TOKEN_VERIFY_URL", &self.token_verify_url),
            ("SESSION_SIGNIN_URL", &self.session_signin_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must be an absolute http(s) URL, got '{}'", name, url);
            }
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Root domain: {}", self.root_domain);
        tracing::info!("  App subdomain: app.{}", self.root_domain);
        tracing::info!("  Session cookie: {}", self.session_cookie);
        tracing::info!("  Token verify endpoint: {}", self.token_verify_url);
        tracing::info!("  Session sign-in endpoint: {}", self.session_signin_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
