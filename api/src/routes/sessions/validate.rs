use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sess_core::services::token::SessionApi;
use sess_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt, TokenReplyResponse, ValidateTokenRequest};
use crate::handlers::handle_session_error;

use super::AppState;

/// Handler for POST /api/v1/sessions/validate
///
/// # Request Body
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The token is authentic and inside its validity window; the body has the
/// same shape as the create response with the token echoed back.
///
/// ## Errors
/// - 401 Unauthorized: `MALFORMED_TOKEN`, `TOKEN_EXPIRED` or `TOKEN_NOT_YET_VALID`,
///   with the partial reply under `details.reply`
pub async fn validate_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse
where
    S: SessionApi + 'static,
{
    // Oversized tokens are rejected without being echoed back
    if let Err(errors) = request.validate() {
        return ErrorResponse::new(error_codes::MALFORMED_TOKEN, "Malformed token")
            .add_detail("fields", errors)
            .to_response(StatusCode::UNAUTHORIZED);
    }

    match state.session_service.validate_token(&request.token).await {
        Ok(reply) => HttpResponse::Ok().json(TokenReplyResponse::from(reply)),
        Err(error) => handle_session_error(error),
    }
}
