//! Token service module for JWT session management
//!
//! This module handles all token-related operations:
//! - Issuing HS256-signed session tokens for a user identifier
//! - Verifying signatures and classifying the validity window
//! - The `SessionApi` contract the transport layer calls into

mod config;
mod contract;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use contract::SessionApi;
pub use service::TokenService;
