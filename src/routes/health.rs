use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::services::{chat::ChatService, itinerary_generation_service::TripPlanner};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    config: web::Data<AppConfig>,
    planner: web::Data<TripPlanner>,
    chat: web::Data<ChatService>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let itinerary_result = check_itinerary_api(&config, &planner);
    health
        .services
        .insert("itinerary_api".to_string(), itinerary_result.clone());

    health.services.insert(
        "chat".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Using {} backend", chat.backend_name())),
        },
    );

    // Without a key every plan is the fallback, so report degraded rather than down.
    if itinerary_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_itinerary_api(config: &AppConfig, planner: &TripPlanner) -> ServiceStatus {
    match &config.itinerary_api.api_key {
        Some(key) if planner.generator().is_configured() => {
            let masked_key = mask_key(key);

            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!(
                    "Model {} configured ({})",
                    config.itinerary_api.model, masked_key
                )),
            }
        }
        _ => ServiceStatus {
            status: "error".to_string(),
            details: Some("ITINERARY_API_KEY not configured, serving fallback plans".to_string()),
        },
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
