//! API layer: boundary middleware and HTTP handlers.

pub mod handlers;
pub mod middleware;
