use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;
use std::io;

use wanderplan_api::{config::AppConfig, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        log::info!("Release mode");
    }

    let config = AppConfig::from_env().map_err(|err| {
        log::error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let (host, port) = (config.host.clone(), config.port);

    let state = AppState::build(config).map_err(|err| {
        log::error!("Startup failed: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .configure(|cfg| state.configure(cfg))
    })
    .bind((host, port))?
    .run()
    .await
}
