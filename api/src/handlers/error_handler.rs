//! Maps session failures and malformed requests to HTTP responses

use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};

use sess_core::errors::{ErrorKind, SessionError};
use sess_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt, TokenReplyResponse};

/// HTTP status for each error category
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidIdentifier => StatusCode::BAD_REQUEST,
        ErrorKind::SigningFailure => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::MalformedToken | ErrorKind::TokenExpired | ErrorKind::TokenNotYetValid => {
            StatusCode::UNAUTHORIZED
        }
    }
}

/// Builds the error body for a failed session operation
///
/// Validation failures carry the partial reply under `details.reply`.
pub fn handle_session_error(error: SessionError) -> HttpResponse {
    let kind = error.kind();
    let mut response = ErrorResponse::new(kind.code(), error.to_string());

    if let Some(reply) = error.reply() {
        response = response.add_detail("reply", TokenReplyResponse::from(reply.clone()));
    }

    response.to_response(status_for(kind))
}

/// Error handler installed on the JSON extractor
///
/// Unparsable or oversized bodies never reach the service.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "rejected request body");

    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string()).to_response(status);

    InternalError::from_response(err, response).into()
}
