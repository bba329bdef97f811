use std::fmt;
use std::str::FromStr;

use auth::SignedToken;
use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

/// Role given to every newly registered user.
pub const DEFAULT_ROLE: &str = "User";

/// Role allowed to list all users.
pub const ADMIN_ROLE: &str = "Admin";

/// User aggregate entity.
///
/// `password_hash` is always a PHC string, never plaintext. `token` holds the
/// last issued session token for reference only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank string is accepted as-is; uniqueness is the store's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace only
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types.
///
/// The password is still plaintext here; the service checks and hashes it.
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to check a username/password pair.
pub struct AuthenticateCommand {
    pub username: Username,
    pub password: String,
}

impl AuthenticateCommand {
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

impl fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for AuthenticateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticateCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: SignedToken,
}
