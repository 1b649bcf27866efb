use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity attributes embedded into an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Store-assigned identity id
    pub id: i64,

    /// Display name
    pub user: String,

    /// Normalized email address
    pub email: String,
}

impl Subject {
    pub fn new(id: i64, user: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            user: user.into(),
            email: email.into(),
        }
    }
}

/// Access token payload.
///
/// Serialized as `{id, user, email, iat, exp}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identity id
    pub id: i64,

    /// Display name
    pub user: String,

    /// Email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject, valid for `ttl` starting at `issued_at`.
    pub fn for_subject(subject: Subject, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = issued_at + ttl;

        Self {
            id: subject.id,
            user: subject.user,
            email: subject.email,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if token is expired.
    ///
    /// A token is only valid while the current time is strictly before `exp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc::now();
        let claims = Claims::for_subject(
            Subject::new(7, "Alice", "alice@x.com"),
            issued_at,
            Duration::hours(1),
        );

        assert_eq!(claims.id, 7);
        assert_eq!(claims.user, "Alice");
        assert_eq!(claims.email, "alice@x.com");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            id: 1,
            user: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_payload_keys() {
        let claims = Claims::for_subject(
            Subject::new(1, "Alice", "alice@x.com"),
            Utc::now(),
            Duration::minutes(5),
        );

        let value = serde_json::to_value(&claims).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(keys, vec!["email", "exp", "iat", "id", "user"]);
    }
}
