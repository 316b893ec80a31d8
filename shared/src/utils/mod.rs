//! Common utility functions

pub mod duration;
pub mod validation;

// Re-export commonly used utilities
pub use duration::{parse_duration, DurationParseError};
pub use validation::IdentifierFormat;
