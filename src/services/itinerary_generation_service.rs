use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ItineraryApiConfig;
use crate::models::{
    plan::{PlanSource, PlannedTrip, TripPlan},
    search::TripSearch,
};
use crate::services::{
    place_service::PlaceCatalog,
    plan_parser::{parse_trip_plan, PlanParseError},
    pricing_service::PricingService,
    prompt_service::build_itinerary_prompt,
};

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("ITINERARY_API_KEY is not configured")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Generation request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Generation response contained no text")]
    EmptyResponse,
    #[error(transparent)]
    Parse(#[from] PlanParseError),
}

/// Client for the hosted `generateContent` text endpoint.
pub struct ItineraryGenerator {
    client: Client,
    config: ItineraryApiConfig,
}

impl ItineraryGenerator {
    pub fn new(config: ItineraryApiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and return the concatenated text of the first candidate.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

/// Turns a search into the results view: prompt, generate, parse, price.
pub struct TripPlanner {
    generator: ItineraryGenerator,
    places: Arc<PlaceCatalog>,
}

impl TripPlanner {
    pub fn new(generator: ItineraryGenerator, places: Arc<PlaceCatalog>) -> Self {
        Self { generator, places }
    }

    pub fn generator(&self) -> &ItineraryGenerator {
        &self.generator
    }

    async fn generate_plan(&self, prompt: &str) -> Result<TripPlan, GenerationError> {
        let text = self.generator.generate_text(prompt).await?;
        Ok(parse_trip_plan(&text)?)
    }

    /// Never fails: any generation problem yields the fixed fallback plan.
    pub async fn plan_trip(&self, search: TripSearch) -> PlannedTrip {
        let prompt = build_itinerary_prompt(&search, &self.places);

        let (plan, source, fallback_reason) = match self.generate_plan(&prompt).await {
            Ok(plan) => (plan, PlanSource::Generated, None),
            Err(err) => {
                log::warn!(
                    "Itinerary generation for {} -> {} failed, using fallback: {}",
                    search.starting_point,
                    search.destination,
                    err
                );
                (TripPlan::fallback(), PlanSource::Fallback, Some(err.to_string()))
            }
        };

        let days = search.days();
        PlannedTrip {
            cost_per_day: PricingService::calculate_cost_per_day(&plan, days),
            tabs: plan.tabs(),
            days,
            plan,
            source,
            fallback_reason,
            search,
        }
    }
}
