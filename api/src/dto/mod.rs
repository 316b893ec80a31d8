pub mod error;
pub mod session_dto;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use session_dto::{CreateTokenRequest, TokenReplyResponse, ValidateTokenRequest};
