use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::db::memory::MemoryStore;
use crate::error::ApiError;
use crate::middleware::auth_context::AdminSession;
use crate::models::sponsor::SponsorQuery;
use crate::services::admin_service::AdminService;

/*
    /api/admin/sponsors?search=
*/
pub async fn list_sponsors(
    _session: AdminSession,
    store: web::Data<Arc<MemoryStore>>,
    params: web::Query<SponsorQuery>,
) -> HttpResponse {
    let search = params.search.as_deref().unwrap_or("");
    HttpResponse::Ok().json(AdminService::list_sponsors(&store, search))
}

/*
    /api/admin/sponsors/{id}/toggle
*/
pub async fn toggle_sponsor(
    session: AdminSession,
    store: web::Data<Arc<MemoryStore>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let sponsor_id = path.into_inner();

    match AdminService::toggle_sponsor(&store, &sponsor_id) {
        Some(updated) => {
            log::info!(
                "{} toggled sponsor {} to active={}",
                session.email,
                sponsor_id,
                updated.item.active
            );
            Ok(HttpResponse::Ok().json(updated))
        }
        None => Err(ApiError::NotFound(format!("Sponsor {} not found", sponsor_id))),
    }
}
