//! Authenticated session read from a request.

use chrono::{DateTime, Utc};

/// A verified session as read from the request by the session-read capability.
///
/// The gateway never creates sessions itself; it only observes the ones the
/// external identity subsystem issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let live = Session {
            email: "user@example.com".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        assert!(!live.is_expired());

        let stale = Session {
            email: "user@example.com".to_string(),
            expires_at: Utc::now() - Duration::seconds(1),
        };
        assert!(stale.is_expired());
    }
}
