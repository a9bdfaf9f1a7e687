//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use posts_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unset or empty keys fall
    /// back to their defaults; unparsable numbers do too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = DatabaseConfig::default();

        let database = DatabaseConfig {
            user: var("DB_USER").unwrap_or(defaults.user),
            password: var("DB_PASSWORD").unwrap_or(defaults.password),
            host: var("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(var("DB_PORT"), defaults.port),
            name: var("DB_NAME").unwrap_or(defaults.name),
            max_connections: parse_or(var("DB_MAX_CONNECTIONS"), defaults.max_connections),
            min_connections: parse_or(var("DB_MIN_CONNECTIONS"), defaults.min_connections),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(var("PORT"), 8080),
            database,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
