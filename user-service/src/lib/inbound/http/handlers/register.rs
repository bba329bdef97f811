use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::UsernameError;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Option<RegisterRequestBody>>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = body?;
    let body = body.ok_or(ParseRegisterRequestError::MissingBody)?;

    state
        .credential_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("User registered!")))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(alias = "Username")]
    username: String,
    #[serde(alias = "Email")]
    email: String,
    #[serde(alias = "Password")]
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Request body is required")]
    MissingBody,

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        Ok(RegisterUserCommand::new(username, email, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
