use crate::config::config::Config;
use crate::model::response::StatusResponse;
use crate::repository::random_source::QrngClient;
use crate::service::draw::DrawService;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use log::{error, info};
use std::io;
use std::sync::Arc;

mod config;
mod controller;
mod error;
mod model;
mod repository;
mod service;

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::success("Everything is working as expected"))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(StatusResponse::failed("Resource not found")))
}

pub struct AppState {
    draw_service: DrawService,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::init().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log4rs::init_file(&config.log_config_path, Default::default()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Log config file {} not usable: {}", config.log_config_path, e),
        )
    })?;

    let source = QrngClient::new(&config).map_err(|e| {
        error!("Failed to build the random source client: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let app_data = web::Data::new(AppState {
        draw_service: DrawService::new(Arc::new(source)),
    });

    info!(
        "Drawing from {} on {}:{}",
        config.random_source_url, config.server_host, config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
