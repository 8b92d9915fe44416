use thiserror::Error;

use crate::models::plan::TripPlan;

#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("response was empty")]
    Empty,
    #[error("response is not valid plan JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response contained no itinerary, hotel, restaurant or transport details")]
    NothingToShow,
}

/// Remove a surrounding markdown code fence (```json ... ``` or ``` ... ```).
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // Drop the info string, e.g. "json", up to the end of the opening line.
        body = match rest.find('\n') {
            Some(newline) if rest[..newline].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &rest[newline + 1..]
            }
            _ => rest.trim_start_matches("json"),
        };
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

pub fn parse_trip_plan(text: &str) -> Result<TripPlan, PlanParseError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(PlanParseError::Empty);
    }

    let plan: TripPlan = serde_json::from_str(body)?;
    if !plan.is_renderable() {
        return Err(PlanParseError::NothingToShow);
    }
    Ok(plan)
}
