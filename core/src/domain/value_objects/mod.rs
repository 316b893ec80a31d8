//! Value objects returned across the service boundary.

pub mod token_reply;

pub use token_reply::TokenReply;
