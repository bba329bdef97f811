use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::AuthenticateCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::CredentialServicePort;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    body: Result<Json<Option<AuthenticateRequestBody>>, JsonRejection>,
) -> Result<ApiSuccess<AuthenticateResponseData>, ApiError> {
    let Json(body) = body?;
    let body = body.ok_or_else(|| ApiError::BadRequest("Request body is required".to_string()))?;

    let username = Username::new(body.username)
        .map_err(|e| ApiError::BadRequest(format!("Invalid username: {}", e)))?;

    let session = state
        .credential_service
        .authenticate(AuthenticateCommand::new(username, body.password))
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthenticateResponseData {
            token: session.token.token,
            message: "Login Success!".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    #[serde(alias = "Username")]
    username: String,
    #[serde(alias = "Password")]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateResponseData {
    pub token: String,
    pub message: String,
}
