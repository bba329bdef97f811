use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Postgres URL; the in-memory store is used when absent
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Token signing settings. `secret` has no default and must be supplied.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
    #[serde(default)]
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.ttl_seconds)
    }
}

// Keep the signing secret out of logs
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = from_toml(
            r#"
            [server]
            http_port = 8080

            [jwt]
            secret = "test-secret-key-for-jwt-signing-at-least-32-bytes"
            ttl_seconds = 300
            "#,
        )
        .unwrap();

        assert!(config.database.url.is_none());
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.jwt.ttl(), chrono::Duration::minutes(5));
        assert!(config.jwt.issuer.is_none());
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let result = from_toml(
            r#"
            [server]
            http_port = 8080

            [jwt]
            ttl_seconds = 300
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let jwt = JwtConfig {
            secret: "super-secret-value".to_string(),
            ttl_seconds: 60,
            issuer: None,
        };
        let rendered = format!("{:?}", jwt);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
