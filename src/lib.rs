//! # Tenant Gateway
//!
//! A thin multi-tenant routing and authentication gateway built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Routing decisions, entities, and capability traits
//! - **Application Layer** ([`application`]) - The partner sign-in flow state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - Session cookie verification and
//!   outbound calls to the external identity subsystem
//! - **API Layer** ([`api`]) - Boundary middleware, handlers, and placeholder pages
//!
//! ## Features
//!
//! - Hostname-based rewriting: one deployed path tree serves the root site,
//!   the `app.` subdomain, and unlimited tenant domains
//! - Fail-closed session gate on the app subdomain
//! - Passwordless partner sign-in (one-time token + email)
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export ROOT_DOMAIN="example.com"
//! export AUTH_SECRET="change-me"
//!
//! # Start the gateway
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FlowOutcome, SignInFlow, SignInService};
    pub use crate::domain::entities::{PartnerLink, Session, SignInError};
    pub use crate::domain::routing::{RouterRules, RoutingDecision};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
