use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Uses HS256 (HMAC with SHA-256).
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: Option<String>,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it from configuration or a secret store, never from source
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: None,
        }
    }

    /// Require the `iss` claim to match on decode.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT.
    ///
    /// Signature, `exp` (required, no leeway) and, when configured, `iss`
    /// are checked.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `InvalidToken` - Signature, algorithm or issuer mismatch
    /// * `DecodingFailed` - Token is malformed or claims do not deserialize
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidIssuer => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        role: String,
        exp: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        iss: Option<String>,
    }

    fn claims_expiring_in(seconds: i64) -> TestClaims {
        TestClaims {
            sub: "user123".to_string(),
            role: "Admin".to_string(),
            exp: chrono::Utc::now().timestamp() + seconds,
            iss: None,
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = claims_expiring_in(60);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode::<TestClaims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&claims_expiring_in(60))
            .expect("Failed to encode token");

        let result = handler2.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler.encode(&claims_expiring_in(-10)).unwrap();

        let result = handler.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_requires_exp() {
        #[derive(Serialize)]
        struct NoExp {
            sub: String,
        }

        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let token = handler
            .encode(&NoExp {
                sub: "user123".to_string(),
            })
            .unwrap();

        assert!(handler.decode::<TestClaims>(&token).is_err());
    }

    #[test]
    fn test_decode_checks_issuer() {
        let signer = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let verifier =
            JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!").with_issuer("expected");

        let mut claims = claims_expiring_in(60);
        claims.iss = Some("someone-else".to_string());
        let token = signer.encode(&claims).unwrap();

        let result = verifier.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken(_))));
    }
}
