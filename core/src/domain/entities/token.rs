//! Token entity for JWT-based sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "session-server";

/// JWT audience
pub const JWT_AUDIENCE: &str = "user";

/// Position of an instant relative to a token's validity window `[nbf, exp)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Before `nbf`
    NotYetValid,
    /// Within `[nbf, exp)`
    Valid,
    /// At or after `exp`
    Expired,
}

impl TimeWindow {
    pub fn is_valid(&self) -> bool {
        matches!(self, TimeWindow::Valid)
    }
}

/// Claims structure for JWT payload
///
/// Fields are only readable: a claims set is fixed when it is built and the
/// signature covers all of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    sub: String,

    /// JWT ID (unique identifier for the token)
    jti: String,

    /// Issuer
    iss: String,

    /// Audience
    aud: String,

    /// Issued at timestamp
    iat: i64,

    /// Not before timestamp
    nbf: i64,

    /// Expiration timestamp
    exp: i64,
}

impl Claims {
    /// Creates the claims for a new session token
    ///
    /// # Arguments
    ///
    /// * `subject` - The user identifier the token authorizes
    /// * `issued_at` - Creation instant, truncated to whole seconds
    /// * `lifetime` - Time until expiry; sub-second parts are dropped
    ///
    /// # Returns
    ///
    /// Claims with a fresh token id, `nbf == iat` and `exp == iat + lifetime`
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        let iat = issued_at.timestamp();
        let lifetime_secs = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);

        Self {
            sub: subject.into(),
            jti: Uuid::new_v4().to_string(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            iat,
            nbf: iat,
            exp: iat.saturating_add(lifetime_secs),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn token_id(&self) -> &str {
        &self.jti
    }

    pub fn issuer(&self) -> &str {
        &self.iss
    }

    pub fn audience(&self) -> &str {
        &self.aud
    }

    pub fn issued_at(&self) -> i64 {
        self.iat
    }

    pub fn not_before(&self) -> i64 {
        self.nbf
    }

    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    /// Classifies `now` (unix seconds) against the validity window
    pub fn window_at(&self, now: i64) -> TimeWindow {
        if now < self.nbf {
            TimeWindow::NotYetValid
        } else if now >= self.exp {
            TimeWindow::Expired
        } else {
            TimeWindow::Valid
        }
    }

    /// Checks if the claims are valid right now
    pub fn is_valid(&self) -> bool {
        self.window_at(Utc::now().timestamp()).is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
    }

    #[test]
    fn test_new_claims_invariants() {
        let claims = Claims::new("123", fixed_instant(), Duration::from_secs(3600));

        assert_eq!(claims.subject(), "123");
        assert_eq!(claims.issuer(), JWT_ISSUER);
        assert_eq!(claims.audience(), JWT_AUDIENCE);
        assert_eq!(claims.issued_at(), 1_700_000_000);
        assert_eq!(claims.not_before(), claims.issued_at());
        assert_eq!(claims.expires_at(), claims.issued_at() + 3600);
        assert!(Uuid::parse_str(claims.token_id()).is_ok());
    }

    #[test]
    fn test_token_ids_are_fresh() {
        let a = Claims::new("123", fixed_instant(), Duration::from_secs(60));
        let b = Claims::new("123", fixed_instant(), Duration::from_secs(60));

        assert_ne!(a.token_id(), b.token_id());
    }

    #[test]
    fn test_sub_second_lifetime_is_truncated() {
        let claims = Claims::new("123", fixed_instant(), Duration::from_millis(1500));
        assert_eq!(claims.expires_at() - claims.issued_at(), 1);
    }

    #[test]
    fn test_window_is_half_open() {
        let claims = Claims::new("123", fixed_instant(), Duration::from_secs(10));
        let iat = claims.issued_at();

        assert_eq!(claims.window_at(iat - 1), TimeWindow::NotYetValid);
        assert_eq!(claims.window_at(iat), TimeWindow::Valid);
        assert_eq!(claims.window_at(iat + 9), TimeWindow::Valid);
        assert_eq!(claims.window_at(iat + 10), TimeWindow::Expired);
        assert_eq!(claims.window_at(iat + 11), TimeWindow::Expired);
    }

    #[test]
    fn test_huge_lifetime_saturates() {
        let claims = Claims::new("123", fixed_instant(), Duration::from_secs(u64::MAX));
        assert_eq!(claims.expires_at(), i64::MAX);
        assert!(claims.is_valid());
    }

    #[test]
    fn test_claims_use_registered_names() {
        let claims = Claims::new("123", fixed_instant(), Duration::from_secs(60));
        let json = serde_json::to_value(&claims).unwrap();

        for key in ["sub", "jti", "iss", "aud", "iat", "nbf", "exp"] {
            assert!(json.get(key).is_some(), "missing claim {}", key);
        }
        assert_eq!(json["aud"], "user");
    }
}
