//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DATABASE_URL | (required, `DB_URL` accepted) | store connection string |
//! | BIND_ADDR | 0.0.0.0 | listen address |
//! | HTTP_PORT | 8080 | listen port |
//! | DB_MAX_CONNECTIONS | 5 | pool size |
//! | DB_ACQUIRE_TIMEOUT_MS | 5000 | wait for a pooled connection |
//! | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
//! | LOG_LEVEL | info | fallback when RUST_LOG is unset |
//! | LOG_DIR | (unset) | daily rolling log files |
//! | ENVIRONMENT | development | development, staging or production |

use shared::error::AppError;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Store connection URL (sqlx SQLite form)
    pub database_url: String,
    /// Listen address
    pub bind_addr: String,
    /// HTTP port
    pub http_port: u16,
    /// Maximum pooled store connections
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection
    pub db_acquire_timeout_ms: u64,
    /// Per-request timeout
    pub request_timeout_ms: u64,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DB_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::config("DATABASE_URL must be set"))?;

        let mut config = Self::for_database(database_url);
        config.bind_addr = std::env::var("BIND_ADDR").unwrap_or(config.bind_addr);
        config.http_port = env_parse("HTTP_PORT", config.http_port)?;
        config.db_max_connections = env_parse("DB_MAX_CONNECTIONS", config.db_max_connections)?;
        config.db_acquire_timeout_ms =
            env_parse("DB_ACQUIRE_TIMEOUT_MS", config.db_acquire_timeout_ms)?;
        config.request_timeout_ms = env_parse("REQUEST_TIMEOUT_MS", config.request_timeout_ms)?;
        config.log_level = std::env::var("LOG_LEVEL").unwrap_or(config.log_level);
        config.log_dir = std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty());
        config.environment = std::env::var("ENVIRONMENT").unwrap_or(config.environment);

        if config.db_max_connections == 0 {
            return Err(AppError::config("DB_MAX_CONNECTIONS must be at least 1"));
        }
        Ok(config)
    }

    /// Defaults for everything except the store URL
    ///
    /// Used by tests and embedders that do not go through the environment.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            bind_addr: "0.0.0.0".into(),
            http_port: 8080,
            db_max_connections: 5,
            db_acquire_timeout_ms: 5000,
            request_timeout_ms: 30000,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.db_acquire_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Parse an optional environment variable, rejecting malformed values
fn env_parse<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} has an invalid value: {raw}"))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_database_defaults() {
        let config = Config::for_database("sqlite::memory:");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_env_parse_falls_back_when_unset() {
        let value: u16 = env_parse("HR_SERVER_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }
}
