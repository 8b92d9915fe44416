use actix_web::web;
use std::sync::Arc;
use thiserror::Error;

use crate::config::AppConfig;
use crate::db::memory::{create_memory_store, MemoryStore};
use crate::routes;
use crate::services::{
    chat::{ChatError, ChatService},
    itinerary_generation_service::{GenerationError, ItineraryGenerator, TripPlanner},
    place_service::PlaceCatalog,
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to build itinerary client: {0}")]
    Itinerary(#[from] GenerationError),
    #[error("Failed to build chat backend: {0}")]
    Chat(#[from] ChatError),
}

/// Everything the handlers pull out of app data, built once per process.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<AppConfig>,
    pub store: web::Data<Arc<MemoryStore>>,
    pub places: web::Data<PlaceCatalog>,
    pub planner: web::Data<TripPlanner>,
    pub chat: web::Data<ChatService>,
}

impl AppState {
    pub fn build(config: AppConfig) -> Result<Self, StartupError> {
        let places = Arc::new(PlaceCatalog::load(config.destinations_file.as_deref()));
        let generator = ItineraryGenerator::new(config.itinerary_api.clone())?;
        if !generator.is_configured() {
            log::warn!("ITINERARY_API_KEY not set, every plan will use the fallback itinerary");
        }
        let planner = TripPlanner::new(generator, places.clone());
        let chat = ChatService::from_config(&config.chat)?;

        Ok(Self {
            config: web::Data::new(config),
            store: web::Data::new(create_memory_store()),
            places: web::Data::from(places),
            planner: web::Data::new(planner),
            chat: web::Data::new(chat),
        })
    }

    /// Registers the shared state and all routes on an app or test service.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.config.clone())
            .app_data(self.store.clone())
            .app_data(self.places.clone())
            .app_data(self.planner.clone())
            .app_data(self.chat.clone())
            .configure(routes::configure);
    }
}
