mod config;
mod handlers;
mod models;
mod routes;
mod state;
mod structs;
mod utils;

use crate::config::settings::Settings;
use crate::state::app_state::AppState;
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().context("Invalid configuration")?;

    // Create shared state
    let app_state = web::Data::new(AppState::new(settings.qr_min_size));
    let origins = settings.cors_allowed_origins.clone();

    let server = HttpServer::new(move || {
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let cors = origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .shutdown_timeout(settings.shutdown_timeout.as_secs())
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?
    .run();

    log::info!(
        "Server is running on http://{}:{}",
        settings.host,
        settings.port
    );

    // Resolves once a termination signal has drained the workers
    server.await.context("Server error")?;
    log::info!("Server shut down");

    Ok(())
}
