//! Capability traits for the external identity subsystem.
//!
//! The gateway does not implement authentication; it consumes these three
//! black-box capabilities. Concrete adapters live in
//! [`crate::infrastructure::auth`]; test mocks are generated with `mockall`
//! under `cfg(test)`.

pub mod session_initiator;
pub mod session_reader;
pub mod token_verifier;

pub use session_initiator::SessionInitiator;
pub use session_reader::SessionReader;
pub use token_verifier::TokenVerifier;

#[cfg(test)]
pub use session_initiator::MockSessionInitiator;
#[cfg(test)]
pub use session_reader::MockSessionReader;
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
