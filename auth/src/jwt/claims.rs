use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Who a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject identifier (the account email)
    pub subject: String,

    /// Privilege flag carried into the token
    pub is_privileged: bool,
}

impl Identity {
    pub fn new(subject: impl ToString, is_privileged: bool) -> Self {
        Self {
            subject: subject.to_string(),
            is_privileged,
        }
    }
}

/// Session claims carried by a signed token.
///
/// Fixed shape; serialized with the claim names `email`, `admin`, `exp` and `iat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account email)
    #[serde(rename = "email")]
    pub subject: String,

    /// Privilege flag
    #[serde(rename = "admin")]
    pub is_privileged: bool,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(rename = "exp")]
    pub expires_at: i64,

    /// Issued at (Unix timestamp, seconds)
    #[serde(rename = "iat", default)]
    pub issued_at: i64,
}

impl Claims {
    /// Build claims for an identity issued at `now` and valid for `lifetime`.
    pub fn for_identity(identity: &Identity, now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            subject: identity.subject.clone(),
            is_privileged: identity.is_privileged,
            expires_at: (now + lifetime).timestamp(),
            issued_at: now.timestamp(),
        }
    }

    /// Expiration as a UTC datetime.
    pub fn expires_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.expires_at, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Check if token is expired.
    ///
    /// Claims are only valid while `expires_at` is strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.expires_at <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_identity() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let identity = Identity::new("a@x.com", true);

        let claims = Claims::for_identity(&identity, now, Duration::hours(72));

        assert_eq!(claims.subject, "a@x.com");
        assert!(claims.is_privileged);
        assert_eq!(claims.issued_at, now.timestamp());
        assert_eq!(claims.expires_at - claims.issued_at, 72 * 60 * 60);
        assert_eq!(claims.expires_at_utc(), now + Duration::hours(72));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            subject: "a@x.com".to_string(),
            is_privileged: false,
            expires_at: 1000,
            issued_at: 0,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_wire_names() {
        let claims = Claims {
            subject: "a@x.com".to_string(),
            is_privileged: true,
            expires_at: 2000,
            issued_at: 1000,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["admin"], true);
        assert_eq!(value["exp"], 2000);
        assert_eq!(value["iat"], 1000);
    }

    #[test]
    fn test_decode_without_issued_at() {
        let claims: Claims =
            serde_json::from_str(r#"{"email":"a@x.com","admin":true,"exp":2000}"#).unwrap();

        assert_eq!(claims.issued_at, 0);
        assert_eq!(claims.expires_at, 2000);
    }

    #[test]
    fn test_decode_missing_subject_fails() {
        let result = serde_json::from_str::<Claims>(r#"{"admin":true,"exp":2000}"#);
        assert!(result.is_err());
    }
}
