//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (echoed token reply, field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
    pub const SIGNING_FAILURE: &str = "SIGNING_FAILURE";
    pub const MALFORMED_TOKEN: &str = "MALFORMED_TOKEN";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_NOT_YET_VALID: &str = "TOKEN_NOT_YET_VALID";
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("JWT secret must not be empty")]
    MissingSecret,

    #[error("Token lifetime must be at least one second")]
    ZeroLifetime,

    #[error("The default JWT secret must not be used in production")]
    DefaultSecretInProduction,
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str, reason: impl ToString) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_details() {
        let response = ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token expired")
            .add_detail("valid", false);

        assert_eq!(response.error, "TOKEN_EXPIRED");
        let details = response.details.unwrap();
        assert_eq!(details["valid"], serde_json::json!(false));
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let response = ErrorResponse::new(error_codes::BAD_REQUEST, "bad");
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("details").is_none());
        assert_eq!(json["error"], "BAD_REQUEST");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("PORT", "abc", "not a number");
        assert_eq!(err.to_string(), "Invalid value for PORT: \"abc\" (not a number)");
    }
}
