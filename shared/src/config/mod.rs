//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing secret, lifetime and identifier format
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::{JwtConfig, DEFAULT_JWT_SECRET, DEFAULT_TOKEN_LIFETIME};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment, reading a `.env` file first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_source(&lookup);

        Ok(Self {
            environment,
            server: ServerConfig::from_source(&lookup)?,
            jwt: JwtConfig::from_source(&lookup)?,
            logging: LoggingConfig::from_source(environment, &lookup)?,
        })
    }

    /// Check the configuration is safe to serve with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if self.environment.is_production() && self.jwt.is_using_default_secret() {
            return Err(ConfigError::DefaultSecretInProduction);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_source(|_| None).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 3123);
        assert_eq!(config.jwt.secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.jwt.token_lifetime, Duration::from_secs(86400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig::from_source(|key| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.validate(), Err(ConfigError::DefaultSecretInProduction));
    }

    #[test]
    fn test_production_with_secret() {
        let config = AppConfig::from_source(|key| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            "JWT_SECRET" => Some("a-real-secret".to_string()),
            "JWT_EXPIRATION" => Some("1h".to_string()),
            _ => None,
        })
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.jwt.token_lifetime, Duration::from_secs(3600));
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
