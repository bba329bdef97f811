#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Utc;
use user_service::domain::user::models::EmailAddress;
use user_service::domain::user::models::User;
use user_service::domain::user::models::UserId;
use user_service::domain::user::models::Username;
use user_service::domain::user::ports::UserRepository;
use user_service::domain::user::service::CredentialService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by the in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryUserRepository>,
    pub token_issuer: Arc<TokenIssuer>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::new());
        let token_issuer = Arc::new(
            TokenIssuer::new(TEST_SECRET, chrono::Duration::minutes(5))
                .expect("Failed to create token issuer"),
        );

        let credential_service = Arc::new(CredentialService::new(
            Arc::clone(&repository),
            Arc::clone(&token_issuer),
        ));

        let router = create_router(
            credential_service,
            Arc::clone(&token_issuer),
            Duration::from_secs(10),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            token_issuer,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register through the API and return the response
    pub async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/user/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in through the API and return the response
    pub async fn authenticate(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/user/authenticate")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Write a user with an arbitrary role straight into the store
    pub async fn seed_user(&self, username: &str, password: &str, role: &str) -> User {
        let user = User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", username)).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            role: role.to_string(),
            token: String::new(),
            created_at: Utc::now(),
        };

        self.repository
            .insert(user)
            .await
            .expect("Failed to seed user")
    }
}
