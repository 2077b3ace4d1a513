//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). The resulting [`AppConfig`] is built once in `main` and handed
//! to whatever needs it.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub roster: RosterConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Directory holding the SQL migrations; unset skips migrating at startup
    #[serde(default)]
    pub migrations_dir: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Limits applied to event teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Largest `max_players` an event may declare
    #[serde(default = "default_max_players_limit")]
    pub max_players_limit: i32,
    /// Largest number of characters accepted in one add request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_players_limit: default_max_players_limit(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "dofusgroup".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_max_players_limit() -> i32 {
    8
}

fn default_max_batch_size() -> usize {
    8
}

/// Read and parse an optional variable, falling back to `default`
fn env_or<T: std::str::FromStr>(key: &str, default: impl FnOnce() -> T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default)
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", default_min_connections),
                migrations_dir: env::var("DATABASE_MIGRATIONS_DIR").ok(),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: env_or("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| parse_origins(&s))
                    .unwrap_or_default(),
            },
            roster: RosterConfig {
                max_players_limit: env_or("ROSTER_MAX_PLAYERS_LIMIT", default_max_players_limit),
                max_batch_size: env_or("ROSTER_MAX_BATCH_SIZE", default_max_batch_size),
            },
        };

        config.roster.validate()?;
        Ok(config)
    }
}

impl RosterConfig {
    /// Reject limits that would make every team change impossible
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players_limit < 1 {
            return Err(ConfigError::InvalidValue(
                "ROSTER_MAX_PLAYERS_LIMIT",
                self.max_players_limit.to_string(),
            ));
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::InvalidValue(
                "ROSTER_MAX_BATCH_SIZE",
                self.max_batch_size.to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("PRODUCTION"), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), Some(Environment::Staging));
        assert_eq!(Environment::parse("qa"), None);
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "dofusgroup");
        assert_eq!(default_host(), "127.0.0.1");
        assert_eq!(default_max_connections(), 20);
        assert_eq!(RosterConfig::default().max_players_limit, 8);
        assert_eq!(RosterConfig::default().max_batch_size, 8);
    }

    #[test]
    fn test_roster_config_validation() {
        assert!(RosterConfig::default().validate().is_ok());

        let zero_players = RosterConfig {
            max_players_limit: 0,
            ..RosterConfig::default()
        };
        assert!(matches!(
            zero_players.validate(),
            Err(ConfigError::InvalidValue("ROSTER_MAX_PLAYERS_LIMIT", _))
        ));

        let zero_batch = RosterConfig {
            max_batch_size: 0,
            ..RosterConfig::default()
        };
        assert!(zero_batch.validate().is_err());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
