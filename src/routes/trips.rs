use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    notification::Navigation,
    search::{ResultsState, TripSearch},
};
use crate::services::itinerary_generation_service::TripPlanner;

pub const RESULTS_PATH: &str = "/results";

/*
    /api/trips/search
    Validates the search form and sends the client to the results view.
*/
pub async fn search(
    config: web::Data<AppConfig>,
    input: web::Json<TripSearch>,
) -> Result<HttpResponse, ApiError> {
    let search = input.into_inner();
    search.validate().map_err(ApiError::Validation)?;

    log::info!(
        "Trip search {} -> {} ({} to {})",
        search.starting_point,
        search.destination,
        search.date_range.from,
        search.date_range.to
    );

    if !config.search_delay.is_zero() {
        tokio::time::sleep(config.search_delay).await;
    }

    Ok(HttpResponse::Ok().json(Navigation::to(RESULTS_PATH, ResultsState { search })))
}

/*
    /api/trips/plan
    Produces the itinerary for a search. Generation failures fall back to the fixed plan.
*/
pub async fn plan(
    planner: web::Data<TripPlanner>,
    input: web::Json<TripSearch>,
) -> Result<HttpResponse, ApiError> {
    let search = input.into_inner();
    search.validate().map_err(ApiError::Validation)?;

    let planned = planner.plan_trip(search).await;
    Ok(HttpResponse::Ok().json(planned))
}
