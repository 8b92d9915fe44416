use actix_web::{web, HttpResponse, Responder};

use crate::models::location::QueryParams;
use crate::services::place_service::{search_places, PlaceCatalog};

/*
    /api/places/destinations
*/
pub async fn get_destinations(
    catalog: web::Data<PlaceCatalog>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let places = search_places(
        &catalog.destinations,
        params.search.as_deref(),
        params.limit.map(usize::from),
    );
    HttpResponse::Ok().json(places)
}

/*
    /api/places/starting-points
*/
pub async fn get_starting_points(
    catalog: web::Data<PlaceCatalog>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let places = search_places(
        &catalog.starting_points,
        params.search.as_deref(),
        params.limit.map(usize::from),
    );
    HttpResponse::Ok().json(places)
}
