use std::sync::Arc;

use anyhow::Context;
use auth::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::domain::user::ports::CredentialServicePort;
use user_service::domain::user::service::CredentialService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    tracing::info!(
        http_port = config.server.http_port,
        request_timeout_secs = config.server.request_timeout_secs,
        token_ttl_seconds = config.jwt.ttl_seconds,
        persistent = config.database.url.is_some(),
        "Configuration loaded"
    );

    let mut token_issuer = TokenIssuer::new(config.jwt.secret.as_bytes(), config.jwt.ttl())
        .context("Invalid JWT configuration")?;
    if let Some(issuer) = &config.jwt.issuer {
        token_issuer = token_issuer.with_issuer(issuer);
    }
    let token_issuer = Arc::new(token_issuer);

    let credential_service: Arc<dyn CredentialServicePort> = match &config.database.url {
        Some(url) => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
            Arc::new(CredentialService::new(
                user_repository,
                Arc::clone(&token_issuer),
            ))
        }
        None => {
            tracing::warn!("No DATABASE__URL configured; users are kept in memory only");
            let user_repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(CredentialService::new(
                user_repository,
                Arc::clone(&token_issuer),
            ))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        credential_service,
        token_issuer,
        config.server.request_timeout(),
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
