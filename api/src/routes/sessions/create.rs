use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sess_core::services::token::SessionApi;
use sess_shared::error_codes;

use crate::dto::{CreateTokenRequest, ErrorResponse, ErrorResponseExt, TokenReplyResponse};
use crate::handlers::handle_session_error;

use super::AppState;

/// Handler for POST /api/v1/sessions/create
///
/// # Request Body
///
/// ```json
/// { "user_id": "123" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "valid": true,
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///     "issued_at": 1700000000,
///     "expired_at": 1700086400
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `INVALID_IDENTIFIER`
/// - 500 Internal Server Error: `SIGNING_FAILURE`
pub async fn create_token<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<CreateTokenRequest>,
) -> HttpResponse
where
    S: SessionApi + 'static,
{
    if let Err(errors) = request.validate() {
        return ErrorResponse::new(error_codes::INVALID_IDENTIFIER, "Invalid user identifier")
            .add_detail("fields", errors)
            .to_response(StatusCode::BAD_REQUEST);
    }

    match state.session_service.issue_token(&request.user_id).await {
        Ok(reply) => HttpResponse::Ok().json(TokenReplyResponse::from(reply)),
        Err(error) => handle_session_error(error),
    }
}
