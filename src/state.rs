use std::sync::Arc;

use crate::application::services::SignInService;
use crate::domain::capabilities::SessionReader;
use crate::domain::routing::RouterRules;

/// Shared application state injected into middleware and handlers.
#[derive(Clone)]
pub struct AppState {
    pub rules: RouterRules,
    pub sessions: Arc<dyn SessionReader>,
    pub signin: Arc<SignInService>,
}

impl AppState {
    pub fn new(
        rules: RouterRules,
        sessions: Arc<dyn SessionReader>,
        signin: Arc<SignInService>,
    ) -> Self {
        Self {
            rules,
            sessions,
            signin,
        }
    }
}
