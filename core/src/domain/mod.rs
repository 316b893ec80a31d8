//! Domain layer containing the token claims entity and reply value object.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{Claims, TimeWindow, JWT_AUDIENCE, JWT_ISSUER};
pub use value_objects::TokenReply;
