//! Application factory
//!
//! Builds the Actix-web application around a shared session service.
//! Request tracing is added by the caller so that tests can mount the bare app.

use actix_web::{web, App, HttpResponse};

use sess_core::services::token::SessionApi;
use sess_shared::error_codes;

use crate::dto::ErrorResponse;
use crate::handlers::json_error_handler;
use crate::routes::sessions::{create::create_token, validate::validate_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S>(
    app_state: web::Data<AppState<S>>,
    max_payload_size: usize,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SessionApi + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/sessions")
                    .route("/create", web::post().to(create_token::<S>))
                    .route("/validate", web::post().to(validate_token::<S>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "session-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
