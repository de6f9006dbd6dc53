//! # Blog API Server
//!
//! The post store gateway: an Actix-web HTTP server mapping method + path to
//! one record store call per request.

use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting blog API on {}:{}", config.host, config.port);

    // One store handle for the whole process, shared by every worker
    let state = AppState::new(&config).await;
    let stage_prefix = config.stage_prefix.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors_headers())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, stage_prefix.as_deref()))
            .default_service(web::to(handlers::fallback))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
