//! Token signing configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ConfigError;
use crate::utils::{parse_duration, IdentifierFormat};

/// Secret used when `JWT_SECRET` is not set
pub const DEFAULT_JWT_SECRET: &str = "super_secret";

/// Token lifetime used when `JWT_EXPIRATION` is not set (24 hours)
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    pub secret: String,

    /// Lifetime of every issued token
    pub token_lifetime: Duration,

    /// Format user identifiers must conform to
    #[serde(default)]
    pub identifier_format: IdentifierFormat,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            token_lifetime: DEFAULT_TOKEN_LIFETIME,
            identifier_format: IdentifierFormat::default(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Set the accepted identifier format
    pub fn with_identifier_format(mut self, format: IdentifierFormat) -> Self {
        self.identifier_format = format;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Create from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secret) = lookup("JWT_SECRET") {
            config.secret = secret;
        }

        if let Some(raw) = lookup("JWT_EXPIRATION") {
            config.token_lifetime = parse_duration(&raw)
                .map_err(|e| ConfigError::invalid("JWT_EXPIRATION", &raw, e))?;
        }

        if let Some(raw) = lookup("JWT_IDENTIFIER_FORMAT") {
            config.identifier_format = raw
                .parse()
                .map_err(|e: String| ConfigError::invalid("JWT_IDENTIFIER_FORMAT", &raw, e))?;
        }

        Ok(config)
    }

    /// Reject configurations that cannot sign usable tokens
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.token_lifetime.as_secs() == 0 {
            return Err(ConfigError::ZeroLifetime);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_lifetime, Duration::from_secs(86400));
        assert_eq!(config.identifier_format, IdentifierFormat::Uuid);
        assert!(config.is_using_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("hello world")
            .with_lifetime(Duration::from_secs(1))
            .with_identifier_format(IdentifierFormat::Opaque);

        assert_eq!(config.secret, "hello world");
        assert_eq!(config.token_lifetime, Duration::from_secs(1));
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_from_source() {
        let config = JwtConfig::from_source(source(&[
            ("JWT_SECRET", "from-env"),
            ("JWT_EXPIRATION", "1h30m"),
            ("JWT_IDENTIFIER_FORMAT", "opaque"),
        ]))
        .unwrap();

        assert_eq!(config.secret, "from-env");
        assert_eq!(config.token_lifetime, Duration::from_secs(5400));
        assert_eq!(config.identifier_format, IdentifierFormat::Opaque);
    }

    #[test]
    fn test_jwt_config_rejects_bad_expiration() {
        let err = JwtConfig::from_source(source(&[("JWT_EXPIRATION", "forever")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "JWT_EXPIRATION"));
    }

    #[test]
    fn test_jwt_config_validate() {
        assert_eq!(JwtConfig::new("").validate(), Err(ConfigError::MissingSecret));
        assert_eq!(
            JwtConfig::new("s").with_lifetime(Duration::ZERO).validate(),
            Err(ConfigError::ZeroLifetime)
        );
        // Claims carry whole seconds
        assert_eq!(
            JwtConfig::new("s").with_lifetime(Duration::from_millis(500)).validate(),
            Err(ConfigError::ZeroLifetime)
        );
    }
}
