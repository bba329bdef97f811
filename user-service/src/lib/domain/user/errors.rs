use auth::JwtError;
use auth::PasswordError;
use auth::PasswordViolations;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for registration and authentication.
///
/// Display strings are the messages returned to HTTP clients.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Malformed input
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Registration
    #[error("Username already exists!")]
    UsernameAlreadyExists(String),

    #[error("This email is already being used!")]
    EmailAlreadyExists(String),

    #[error("{0}")]
    WeakPassword(PasswordViolations),

    // Authentication
    #[error("User not found!")]
    NotFound(String),

    #[error("Password is incorrect")]
    InvalidPassword,

    // Infrastructure
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<PasswordViolations> for UserError {
    fn from(violations: PasswordViolations) -> Self {
        UserError::WeakPassword(violations)
    }
}
