use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::db::memory::MemoryStore;
use crate::error::ApiError;
use crate::middleware::auth_context::AdminSession;
use crate::models::bookings::{BookingQuery, StatusUpdate};
use crate::services::admin_service::AdminService;

/*
    /api/admin/bookings?search=&status=
*/
pub async fn list_bookings(
    _session: AdminSession,
    store: web::Data<Arc<MemoryStore>>,
    params: web::Query<BookingQuery>,
) -> Result<HttpResponse, ApiError> {
    let status = params.status_filter().map_err(ApiError::Validation)?;
    let search = params.search.as_deref().unwrap_or("");
    Ok(HttpResponse::Ok().json(AdminService::list_bookings(&store, search, status)))
}

/*
    /api/admin/bookings/{id}/status
*/
pub async fn update_status(
    session: AdminSession,
    store: web::Data<Arc<MemoryStore>>,
    path: web::Path<String>,
    input: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let booking_id = path.into_inner();
    let status = input.into_inner().status;

    match AdminService::update_booking_status(&store, &booking_id, status) {
        Some(updated) => {
            log::info!("{} set booking {} to {}", session.email, booking_id, status);
            Ok(HttpResponse::Ok().json(updated))
        }
        None => Err(ApiError::NotFound(format!("Booking {} not found", booking_id))),
    }
}

/*
    /api/admin/summary
*/
pub async fn summary(_session: AdminSession, store: web::Data<Arc<MemoryStore>>) -> HttpResponse {
    HttpResponse::Ok().json(AdminService::summary(&store))
}
