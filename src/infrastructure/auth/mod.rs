pub mod cookie_session;
pub mod http_initiator;
pub mod http_verifier;

pub use cookie_session::CookieSessionStore;
pub use http_initiator::HttpSessionInitiator;
pub use http_verifier::HttpTokenVerifier;
