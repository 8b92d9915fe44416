use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::memory::MemoryStore;
use crate::error::ApiError;
use crate::models::trip::TripQuery;
use crate::services::dashboard_service::DashboardService;

/*
    /api/dashboard/trips?status=Upcoming|Completed
*/
pub async fn get_trips(
    store: web::Data<Arc<MemoryStore>>,
    params: web::Query<TripQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(DashboardService::list_trips(&store, params.status))
}

/*
    /api/dashboard/trips/{id}
*/
pub async fn delete_trip(
    store: web::Data<Arc<MemoryStore>>,
    path: web::Path<u32>,
) -> Result<HttpResponse, ApiError> {
    let trip_id = path.into_inner();
    match DashboardService::delete_trip(&store, trip_id) {
        Some(notification) => Ok(HttpResponse::Ok().json(notification)),
        None => Err(ApiError::NotFound(format!("Trip {} not found", trip_id))),
    }
}
