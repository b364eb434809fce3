pub mod signin_service;

pub use signin_service::{FlowOutcome, FlowStatus, SignInFlow, SignInService};
