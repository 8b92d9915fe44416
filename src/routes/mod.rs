use actix_web::{error, web, HttpResponse, ResponseError};

use crate::error::ApiError;

pub mod admin;
pub mod chat;
pub mod dashboard;
pub mod health;
pub mod location;
pub mod trips;

/// Registers every route of the service. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, ApiError::Validation(message).error_response())
            .into()
    }))
    .route("/health", web::get().to(health::health_check))
    .route("/chat", web::post().to(chat::chat))
    .service(
        web::scope("/api")
            .service(
                web::scope("/places")
                    .route("/destinations", web::get().to(location::get_destinations))
                    .route(
                        "/starting-points",
                        web::get().to(location::get_starting_points),
                    ),
            )
            .service(
                web::scope("/trips")
                    .route("/search", web::post().to(trips::search))
                    .route("/plan", web::post().to(trips::plan)),
            )
            .service(
                web::scope("/dashboard")
                    .route("/trips", web::get().to(dashboard::get_trips))
                    .route("/trips/{id}", web::delete().to(dashboard::delete_trip)),
            )
            .configure(admin::config),
    )
    .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    ApiError::NotFound("Route not found".to_string()).error_response()
}
