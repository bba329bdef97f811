use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::TokenIssuer;
use chrono::Utc;

use crate::domain::user::models::AuthenticateCommand;
use crate::domain::user::models::AuthenticatedSession;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::DEFAULT_ROLE;
use crate::user::errors::UserError;
use crate::user::ports::CredentialServicePort;
use crate::user::ports::UserRepository;

/// Domain service for registration and login.
///
/// Holds no mutable state; every collaborator is injected and shared read-only.
pub struct CredentialService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
    password_policy: PasswordPolicy,
}

impl<UR> CredentialService<UR>
where
    UR: UserRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_issuer` - Signs session tokens on successful login
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            token_issuer,
            password_hasher: PasswordHasher::new(),
            password_policy: PasswordPolicy::new(),
        }
    }

    // Argon2 is CPU and memory bound, so it runs on the blocking pool
    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, user: &User) -> Result<bool, UserError> {
        let hasher = self.password_hasher.clone();
        let stored_hash = user.password_hash.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                UserError::from(e)
            })
    }
}

#[async_trait]
impl<UR> CredentialServicePort for CredentialService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .exists_by_username(&command.username)
            .await?
        {
            tracing::info!(username = %command.username, "Registration rejected: username taken");
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        if self.repository.exists_by_email(&command.email).await? {
            tracing::info!(email = %command.email, "Registration rejected: email taken");
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        self.password_policy.validate(&command.password)?;

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            role: DEFAULT_ROLE.to_string(),
            token: String::new(),
            created_at: Utc::now(),
        };

        // The store's uniqueness constraint decides races the checks above miss
        let created_user = self.repository.insert(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn authenticate(
        &self,
        command: AuthenticateCommand,
    ) -> Result<AuthenticatedSession, UserError> {
        let mut user = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or_else(|| UserError::NotFound(command.username.as_str().to_string()))?;

        let is_valid = self.verify_password(command.password, &user).await?;

        if !is_valid {
            tracing::info!(username = %user.username, "Login rejected: wrong password");
            return Err(UserError::InvalidPassword);
        }

        let token = self.token_issuer.issue(user.username.as_str(), &user.role)?;

        user.token = token.token.clone();
        match self.repository.update(user.clone()).await {
            Ok(updated_user) => user = updated_user,
            Err(e) => {
                tracing::warn!(
                    user_id = %user.id,
                    error = %e,
                    "Failed to store issued token; returning it anyway"
                );
            }
        }

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            expires_at = %token.expires_at,
            "User authenticated"
        );

        Ok(AuthenticatedSession { user, token })
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }
}
