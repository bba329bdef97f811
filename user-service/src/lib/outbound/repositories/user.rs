use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    token: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        let id = r.id;
        Ok(User {
            id: UserId(id),
            username: Username::new(r.username).map_err(|e| unusable_row(id, e))?,
            email: EmailAddress::new(r.email).map_err(|e| unusable_row(id, e))?,
            password_hash: r.password_hash,
            role: r.role,
            token: r.token,
            created_at: r.created_at,
        })
    }
}

// A stored row that no longer parses is a storage problem, not bad input
fn unusable_row(id: Uuid, e: impl std::fmt::Display) -> UserError {
    UserError::DatabaseError(format!("stored user {} is unusable: {}", id, e))
}

/// Translate unique-constraint violations into duplicate errors.
fn map_write_error(e: sqlx::Error, user: &User) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some(USERNAME_CONSTRAINT) {
                return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
            }
            if db_err.constraint() == Some(EMAIL_CONSTRAINT) {
                return UserError::EmailAlreadyExists(user.email.as_str().to_string());
            }
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, token, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, token, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.token)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, role = $5, token = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(&user.token)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.username.as_str().to_string()));
        }

        Ok(user)
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, role, token, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }
}
