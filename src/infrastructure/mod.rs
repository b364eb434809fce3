//! Infrastructure layer: concrete adapters for the identity capabilities.

pub mod auth;
