//! # Session Server Core
//!
//! Token issuance and validation for the session server.
//! This crate contains the claims entity, the reply value object, the
//! error taxonomy surfaced to callers, and the stateless `TokenService`
//! that signs and verifies tokens.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claims, TimeWindow, TokenReply};
pub use errors::{ErrorKind, SessionError, SessionResult};
pub use services::{SessionApi, TokenService, TokenServiceConfig};
