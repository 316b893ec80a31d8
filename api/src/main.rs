use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;

use sess_api::app::create_app;
use sess_api::routes::sessions::AppState;
use sess_api::telemetry::init_tracing;
use sess_core::services::token::{TokenService, TokenServiceConfig};
use sess_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (reads .env when present)
    let config = AppConfig::from_env()?;

    init_tracing(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "invalid configuration");
        return Err(err.into());
    }

    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set, using the default secret");
    }

    let service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let app_state = web::Data::new(AppState::new(service));
    let max_payload_size = config.server.max_payload_size;

    info!(
        port = config.server.port,
        environment = %config.environment,
        identifier_format = %config.jwt.identifier_format,
        token_lifetime_secs = config.jwt.token_lifetime.as_secs(),
        "starting session server"
    );

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), max_payload_size).wrap(TracingLogger::default())
    })
    .shutdown_timeout(config.server.shutdown_timeout);

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    // `run` handles SIGINT/SIGTERM and drains in-flight requests
    server.bind(config.server.bind_address())?.run().await?;

    info!("stopped");
    Ok(())
}
