mod config;
mod model;
mod web;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use config::Config;
use model::ModelManager;
use web::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting chat assist service");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Google API key loaded: {}", config.google_api_key.is_some());

    // Capability handles are built once and shared read-only by all workers
    let model_manager = match ModelManager::from_config(&config) {
        Ok(manager) => Data::new(manager),
        Err(e) => {
            error!("Failed to initialize model clients: {:#}", e);
            std::process::exit(1);
        }
    };

    let cors_origin = config.cors_origin.clone();
    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(model_manager.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
