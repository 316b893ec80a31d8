//! Domain entities representing the signed token payload.

pub mod token;

pub use token::{Claims, TimeWindow, JWT_AUDIENCE, JWT_ISSUER};
