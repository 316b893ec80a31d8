//! Shared utilities and common types for the session server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and configuration errors
//! - Utility functions (duration parsing, identifier validation)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, JwtConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ConfigError, ErrorResponse};
pub use utils::{duration, validation, IdentifierFormat};
