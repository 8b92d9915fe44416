#![allow(dead_code)]

use actix_web::App;
use serde_json::{json, Value};
use std::time::Duration;

use wanderplan_api::config::{AppConfig, ChatBackend};
use wanderplan_api::middleware::auth::generate_token;
use wanderplan_api::routes::admin::login::ADMIN_EMAIL;
use wanderplan_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test_secret";

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// App with no itinerary key, so every plan is the fallback.
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// App whose itinerary client talks to `base_url`, usually a wiremock server.
    pub fn with_itinerary_api(base_url: &str) -> Self {
        let mut config = test_config();
        config.itinerary_api.api_key = Some("test-itinerary-key".to_string());
        config.itinerary_api.base_url = base_url.to_string();
        config.itinerary_api.timeout = Duration::from_secs(5);
        Self::with_config(config)
    }

    pub fn with_hosted_chat(model_url: &str) -> Self {
        let mut config = test_config();
        config.chat.backend = ChatBackend::Hosted;
        config.chat.model_url = Some(model_url.to_string());
        config.chat.model_token = Some("test-chat-token".to_string());
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::build(config).expect("test app state");
        Self { state }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = self.state.clone();
        App::new().configure(move |cfg| state.configure(cfg))
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.environment = "test".to_string();
    config.jwt_secret = TEST_JWT_SECRET.to_string();
    config.search_delay = Duration::ZERO;
    config
}

pub fn sample_search() -> Value {
    json!({
        "startingPoint": "mumbai",
        "destination": "paris",
        "dateRange": { "from": "2025-06-01", "to": "2025-06-07" },
        "travelers": 2,
        "budget": 2500.0
    })
}

/// Bearer header value for a freshly signed admin session.
pub fn admin_bearer() -> String {
    let token = generate_token(TEST_JWT_SECRET, ADMIN_EMAIL).expect("token");
    format!("Bearer {}", token)
}
