pub mod admin_service;
pub mod chat;
pub mod dashboard_service;
pub mod itinerary_generation_service;
pub mod place_service;
pub mod plan_parser;
pub mod pricing_service;
pub mod prompt_service;
