use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// A freshly signed session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    /// Compact JWS string
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies short-lived session tokens.
///
/// The signing key and time-to-live are fixed at construction and shared
/// read-only across requests.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    ttl: Duration,
    issuer: Option<String>,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing key
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Empty secret or non-positive TTL
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidConfiguration(
                "signing secret must not be empty".to_string(),
            ));
        }
        if ttl < Duration::seconds(1) {
            return Err(JwtError::InvalidConfiguration(format!(
                "token ttl must be at least one second, got {}s",
                ttl.num_seconds()
            )));
        }
        if secret.len() < 32 {
            tracing::warn!(
                secret_len = secret.len(),
                "JWT signing secret is shorter than 32 bytes"
            );
        }

        Ok(Self {
            jwt_handler: JwtHandler::new(secret),
            ttl,
            issuer: None,
        })
    }

    /// Stamp tokens with `iss` and require it on verification.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        let issuer = issuer.to_string();
        self.jwt_handler = self.jwt_handler.with_issuer(&issuer);
        self.issuer = Some(issuer);
        self
    }

    /// Sign a token for `username` carrying `role`, valid for the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, username: &str, role: &str) -> Result<SignedToken, JwtError> {
        // JWT timestamps have whole-second precision
        let issued_at = Utc::now().trunc_subsecs(0);
        let mut claims = Claims::for_session(username, role, issued_at, self.ttl);
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer);
        }

        let token = self.jwt_handler.encode(&claims)?;

        Ok(SignedToken {
            token,
            issued_at,
            expires_at: issued_at + self.ttl,
        })
    }

    /// Verify signature and expiry, then return the claims.
    ///
    /// Consumers of issued tokens must go through this before trusting any claim.
    ///
    /// # Errors
    /// * `TokenExpired` - Token lifetime has elapsed
    /// * `InvalidToken` - Signature or issuer mismatch
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
