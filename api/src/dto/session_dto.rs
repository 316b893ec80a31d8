//! Request and response bodies of the session endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use sess_core::domain::value_objects::TokenReply;

/// Request body for `POST /api/v1/sessions/create`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateTokenRequest {
    /// Checked against the configured identifier format by the service
    #[validate(length(max = 256, message = "User id is too long"))]
    pub user_id: String,
}

/// Request body for `POST /api/v1/sessions/validate`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ValidateTokenRequest {
    #[validate(length(max = 8192, message = "Token is too long"))]
    pub token: String,
}

/// Token reply as sent over the wire
///
/// Claim times are omitted when they could not be recovered from the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReplyResponse {
    pub valid: bool,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_at: Option<i64>,
}

impl From<TokenReply> for TokenReplyResponse {
    fn from(reply: TokenReply) -> Self {
        Self {
            valid: reply.valid,
            token: reply.token,
            issued_at: reply.issued_at,
            expired_at: reply.expires_at,
        }
    }
}
