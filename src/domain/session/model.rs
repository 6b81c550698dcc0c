use chrono::{DateTime, Utc};

/// A short-lived authorization token tied to a user and an expiry time.
///
/// The `id` doubles as the opaque bearer token handed to clients: 32 ASCII
/// letters and digits. Uniqueness is assumed rather than enforced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = Session {
            id: "A".repeat(32),
            user_id: "u-1".to_string(),
            created_at: now - Duration::seconds(10),
            expires_at: now,
        };
        assert!(session.is_expired(now));
        assert!(!session.is_expired(now - Duration::seconds(1)));
    }
}
