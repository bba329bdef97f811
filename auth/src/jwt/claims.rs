use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// `sub` carries the username. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Flat role string, e.g. "User"
    pub role: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Build claims for a session starting at `issued_at` and lasting `ttl`.
    pub fn for_session(
        username: impl ToString,
        role: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: username.to_string(),
            role: role.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            iss: None,
        }
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    pub fn username(&self) -> &str {
        &self.sub
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}
