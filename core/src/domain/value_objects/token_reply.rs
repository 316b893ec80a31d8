//! Token reply value object returned by both session operations.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::Claims;

/// Outcome of issuing or validating a token
///
/// `issued_at` / `expires_at` are present whenever the claims could be
/// recovered from the token, even if the token is not currently valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReply {
    /// Well-formed, correctly signed and inside its validity window
    pub valid: bool,

    /// The encoded token (freshly signed on issue, echoed on validate)
    pub token: String,

    /// Issued-at timestamp (unix seconds)
    pub issued_at: Option<i64>,

    /// Expiry timestamp (unix seconds)
    pub expires_at: Option<i64>,
}

impl TokenReply {
    /// Reply for a freshly signed token
    pub fn issued(token: String, claims: &Claims) -> Self {
        Self::recovered(token, claims, true)
    }

    /// Reply for a token whose claims were verified and decoded
    pub fn recovered(token: impl Into<String>, claims: &Claims, valid: bool) -> Self {
        Self {
            valid,
            token: token.into(),
            issued_at: Some(claims.issued_at()),
            expires_at: Some(claims.expires_at()),
        }
    }

    /// Reply for a token that could not be decoded or verified
    pub fn unparsed(token: impl Into<String>) -> Self {
        Self {
            valid: false,
            token: token.into(),
            issued_at: None,
            expires_at: None,
        }
    }

    /// Whether the claim times were recovered
    pub fn has_claims(&self) -> bool {
        self.issued_at.is_some() && self.expires_at.is_some()
    }
}
