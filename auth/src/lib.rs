//! Credential primitives for the user service.
//!
//! - Password hashing (Argon2id) and a password strength policy
//! - Session token issuance and verification (HS256 JWT)
//!
//! Nothing in this crate performs I/O; the service owns persistence.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("My_password1").unwrap();
//! assert!(hasher.verify("My_password1", &hash).unwrap());
//! ```
//!
//! ## Password Policy
//! ```
//! use auth::{PasswordPolicy, PasswordViolation};
//!
//! let policy = PasswordPolicy::new();
//! assert!(policy.evaluate("Abcdefg1!").is_empty());
//! assert_eq!(
//!     policy.evaluate("Abcdefgh1"),
//!     vec![PasswordViolation::MissingSpecialCharacter]
//! );
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(5)).unwrap();
//! let signed = issuer.issue("alice", "User").unwrap();
//! let claims = issuer.verify(&signed.token).unwrap();
//! assert_eq!(claims.username(), "alice");
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

pub use issuer::SignedToken;
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PasswordViolation;
pub use password::PasswordViolations;
