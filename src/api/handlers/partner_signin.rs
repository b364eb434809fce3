//! Partner sign-in endpoint driving the flow to a navigation.

use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::application::services::{FlowOutcome, SignInFlow};
use crate::domain::entities::PartnerLink;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PartnerLinkQuery {
    pub token: Option<String>,
    pub email: Option<String>,
}

/// Exchanges a one-time partner link for a session and navigates.
///
/// # Endpoint
///
/// `GET /app/auth/partner-signin` and `GET /home/auth/partner-signin`
/// (reached as `/auth/partner-signin` through the rewrite), with `token` and
/// `email` query parameters.
///
/// Success navigates to the preferred destination; every failure navigates to
/// `/login?error=<indicator>`. Nothing is retried here; the user re-initiates
/// by requesting a new link.
pub async fn partner_signin_handler(
    State(st): State<AppState>,
    Query(query): Query<PartnerLinkQuery>,
) -> Redirect {
    let link = PartnerLink::new(query.token, query.email);
    let mut flow = SignInFlow::new();

    match st.signin.run(&mut flow, &link).await {
        Some(FlowOutcome::Success { destination }) => Redirect::temporary(&destination),
        Some(FlowOutcome::Failed(error)) => {
            Redirect::temporary(&format!("/login?error={}", error.query_code()))
        }
        // A fresh flow instance always reaches an outcome; this arm exists
        // for the state machine contract only
        None => Redirect::temporary("/login"),
    }
}
