use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::ports::CredentialServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Admin-only listing of every account. Hashes and tokens are never exposed.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    let users = state
        .credential_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    tracing::info!(admin = %caller.username, count = users.len(), "Listed users");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        users.iter().map(UserData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}
