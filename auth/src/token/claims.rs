use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Ephemeral: constructed at issuance, consumed once per request at
/// verification. There is no revocation list; a token is valid until `exp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a user with an expiry relative to now.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `email` - User email address
    /// * `ttl_secs` - Seconds until the token expires
    pub fn for_user(subject: impl ToString, email: impl ToString, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_secs);

        Self {
            sub: subject.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
