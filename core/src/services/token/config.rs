//! Configuration for the token service

use std::time::Duration;

use sess_shared::{IdentifierFormat, JwtConfig};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Lifetime of every issued token
    pub token_lifetime: Duration,
    /// Format accepted for user identifiers
    pub identifier_format: IdentifierFormat,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>, token_lifetime: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_lifetime,
            identifier_format: IdentifierFormat::default(),
        }
    }

    pub fn with_identifier_format(mut self, format: IdentifierFormat) -> Self {
        self.identifier_format = format;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            token_lifetime: config.token_lifetime,
            identifier_format: config.identifier_format,
        }
    }
}
