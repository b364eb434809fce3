//! Core domain entities. All values are transient and per-request; nothing
//! here is persisted.

pub mod partner_link;
pub mod session;

pub use partner_link::{PartnerLink, SessionStart, SignInError, TokenVerification};
pub use session::Session;
