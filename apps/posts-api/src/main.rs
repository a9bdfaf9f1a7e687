//! # Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use posts_infra::{SqlPostRepository, database};

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::Cors;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    let db = database::connect(&config.database).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        std::io::Error::other(e.to_string())
    })?;

    let state = AppState::new(Arc::new(SqlPostRepository::new(db)));

    tracing::info!("Starting posts API server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
