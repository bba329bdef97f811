use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::ADMIN_ROLE;
use crate::inbound::http::router::AppState;

/// Caller identity taken from a verified session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware that only lets verified admin tokens through.
///
/// Missing or invalid tokens get 401, valid tokens without the admin role get 403.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(IntoResponse::into_response)?;

    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    if claims.role() != ADMIN_ROLE {
        tracing::warn!(
            username = %claims.username(),
            role = %claims.role(),
            "Admin route refused"
        );
        return Err(ApiError::Forbidden("Admin role required".to_string()).into_response());
    }

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
