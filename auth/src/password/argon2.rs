use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Argon2id with a fresh random salt per hash. The default parameters are the
/// OWASP recommendation (19 MiB memory, 2 iterations, 1 lane, 32-byte output).
/// Hashes are PHC strings, so verification always uses the parameters that
/// were in force when the hash was produced.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a new password hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The digest comparison is constant time.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed or uses unsupported parameters
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "Sup3r_secret!";

        let hash = hasher.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));

        assert!(!hasher
            .verify("Sup3r_secret?", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("Abcdefg1!").expect("Failed to hash password");
        let second = hasher.hash("Abcdefg1!").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("Abcdefg1!", &first).unwrap());
        assert!(hasher.verify("Abcdefg1!", &second).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("Plaintext_42").unwrap();
        assert!(!hash.contains("Plaintext_42"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_verify_uses_parameters_embedded_in_hash() {
        let cheap = PasswordHasher {
            argon2: Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(8 * 1024, 1, 1, None).unwrap(),
            ),
        };
        let hash = cheap.hash("Cheap_hash1").unwrap();
        assert!(hash.contains("m=8192,t=1,p=1"));

        // A hasher with different defaults still verifies it
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("Cheap_hash1", &hash).unwrap());
    }
}
