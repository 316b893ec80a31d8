//! Error taxonomy surfaced by the session operations.
//!
//! Every failure is one `SessionError` variant so callers can match on the
//! category directly. Validation errors carry the partial `TokenReply`
//! (claim times are only present when the token could be decoded), and
//! decoding/signing errors keep the underlying `jsonwebtoken` error as source.

use sess_shared::error_codes;
use thiserror::Error;

use crate::domain::value_objects::TokenReply;

/// Errors returned by `issue_token` and `validate_token`
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid user identifier")]
    InvalidIdentifier { identifier: String },

    #[error("Unable to sign token")]
    SigningFailure {
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("Malformed token")]
    MalformedToken {
        reply: TokenReply,
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    #[error("Token expired")]
    TokenExpired { reply: TokenReply },

    #[error("Token not yet valid")]
    TokenNotYetValid { reply: TokenReply },
}

/// Category of a `SessionError`, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidIdentifier,
    SigningFailure,
    MalformedToken,
    TokenExpired,
    TokenNotYetValid,
}

impl ErrorKind {
    /// Machine-readable code exposed to callers
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifier => error_codes::INVALID_IDENTIFIER,
            ErrorKind::SigningFailure => error_codes::SIGNING_FAILURE,
            ErrorKind::MalformedToken => error_codes::MALFORMED_TOKEN,
            ErrorKind::TokenExpired => error_codes::TOKEN_EXPIRED,
            ErrorKind::TokenNotYetValid => error_codes::TOKEN_NOT_YET_VALID,
        }
    }

    /// Caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::SigningFailure)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            SessionError::SigningFailure { .. } => ErrorKind::SigningFailure,
            SessionError::MalformedToken { .. } => ErrorKind::MalformedToken,
            SessionError::TokenExpired { .. } => ErrorKind::TokenExpired,
            SessionError::TokenNotYetValid { .. } => ErrorKind::TokenNotYetValid,
        }
    }

    /// Partial reply carried by validation failures
    pub fn reply(&self) -> Option<&TokenReply> {
        match self {
            SessionError::MalformedToken { reply, .. }
            | SessionError::TokenExpired { reply }
            | SessionError::TokenNotYetValid { reply } => Some(reply),
            SessionError::InvalidIdentifier { .. } | SessionError::SigningFailure { .. } => None,
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
