use async_trait::async_trait;

use crate::domain::user::models::AuthenticateCommand;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for credential operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Checks run in order and the first failure is returned: username
    /// uniqueness, email uniqueness, password policy.
    ///
    /// # Arguments
    /// * `command` - Validated username and email plus the plaintext password
    ///
    /// # Returns
    /// Stored user with role "User" and an empty token
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `WeakPassword` - Password breaks one or more policy rules
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify a username/password pair and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Username and plaintext password
    ///
    /// # Returns
    /// The user and a freshly signed token
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `InvalidPassword` - Password does not match
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Store lookup failed
    async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> Result<AuthenticatedSession, UserError>;

    /// List every stored user.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for user aggregate.
///
/// Implementations must enforce username and email uniqueness themselves;
/// the service's existence checks are only a fast path.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Check whether a username is taken.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Check whether an email is registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, user: User) -> Result<User, UserError>;

    /// Update an existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Retrieve all users from storage, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;
}
