//! Server configuration module

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Seconds in-flight requests get to finish after a stop signal
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 3123,
            workers: 0,
            shutdown_timeout: default_shutdown_timeout(),
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Create from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("SERVER_HOST") {
            config.host = host;
        }
        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("PORT", &raw, e))?;
        }
        if let Some(raw) = lookup("SERVER_WORKERS") {
            config.workers = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("SERVER_WORKERS", &raw, e))?;
        }
        if let Some(raw) = lookup("SHUTDOWN_TIMEOUT") {
            config.shutdown_timeout = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("SHUTDOWN_TIMEOUT", &raw, e))?;
        }

        Ok(config)
    }
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_max_payload_size() -> usize {
    16 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3123);
        assert_eq!(config.workers, 0);
        assert_eq!(config.shutdown_timeout, 30);
        assert_eq!(config.bind_address(), "0.0.0.0:3123");
    }

    #[test]
    fn test_server_config_from_source() {
        let config = ServerConfig::from_source(|key| match key {
            "PORT" => Some("8080".to_string()),
            "SERVER_HOST" => Some("127.0.0.1".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_rejects_bad_port() {
        let err = ServerConfig::from_source(|key| match key {
            "PORT" => Some("70000".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }
}
