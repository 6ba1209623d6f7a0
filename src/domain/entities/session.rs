use chrono::{DateTime, Utc};

/// Signed-in identity provider session.
///
/// The `id_token` doubles as the value of the `session_token` cookie used by
/// the auth gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id_token: String,
    pub local_id: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Remaining lifetime in whole seconds, clamped at zero.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            id_token: "token".to_string(),
            local_id: "uid-1".to_string(),
            email: "alice@example.com".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(now + Duration::seconds(60));

        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + Duration::seconds(60)));
        assert_eq!(session.remaining_seconds(now), 60);
        assert_eq!(session.remaining_seconds(now + Duration::hours(1)), 0);
    }
}
