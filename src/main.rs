// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, upstream clients, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::TripService;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {:#}", e);
        std::process::exit(1);
    }

    log::info!("Starting trip-analyzer service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    log::info!(
        "Upstreams: geocode={} geosearch={} (timeout {}s)",
        config.geocode_url,
        config.geosearch_url,
        config.upstream_timeout_secs
    );

    // 4. Build upstream clients
    let trip_service = match TripService::from_config(&config) {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            log::error!("Failed to build upstream clients: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(trip_service.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::home_config)
            .configure(handlers::health_config)
            .configure(handlers::trips_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
