use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::list_users::list_users;
use super::handlers::register::register;
use super::middleware::require_admin;
use crate::domain::user::ports::CredentialServicePort;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServicePort>,
    pub token_issuer: Arc<TokenIssuer>,
}

pub fn create_router(
    credential_service: Arc<dyn CredentialServicePort>,
    token_issuer: Arc<TokenIssuer>,
    request_timeout: Duration,
) -> Router {
    let state = AppState {
        credential_service,
        token_issuer,
    };

    let public_routes = Router::new()
        .route("/api/user/register", post(register))
        .route("/api/user/authenticate", post(authenticate));

    let admin_routes = Router::new()
        .route("/api/user", get(list_users))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry bearer tokens
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
