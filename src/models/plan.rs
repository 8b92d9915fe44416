use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};

use crate::models::search::TripSearch;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub day: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub activities: Vec<String>,
}

/// The trip the generative endpoint writes for us. Every field is optional because
/// the model is only asked, not forced, to follow the schema.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_name: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_location: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxi_name: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxi_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_cost_per_serving: Option<f64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTab {
    Itinerary,
    Accommodation,
    Restaurant,
    Transport,
}

// Blank text and zero costs render as nothing, so they do not count as present.
fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |text| !text.trim().is_empty())
}

fn has_cost(value: Option<f64>) -> bool {
    value.map_or(false, |cost| cost != 0.0 && !cost.is_nan())
}

impl TripPlan {
    pub fn has_itinerary(&self) -> bool {
        !self.itinerary.is_empty()
    }

    pub fn has_accommodation(&self) -> bool {
        has_text(&self.hotel_name) || has_text(&self.hotel_location) || has_cost(self.hotel_cost)
    }

    pub fn has_restaurant(&self) -> bool {
        has_text(&self.restaurant_name) || has_cost(self.restaurant_cost_per_serving)
    }

    pub fn has_transport(&self) -> bool {
        has_text(&self.bus_name)
            || has_cost(self.bus_cost)
            || has_text(&self.taxi_name)
            || has_cost(self.taxi_cost)
    }

    /// Tabs the results view can show, in display order.
    pub fn tabs(&self) -> Vec<PlanTab> {
        let mut tabs = Vec::with_capacity(4);
        if self.has_itinerary() {
            tabs.push(PlanTab::Itinerary);
        }
        if self.has_accommodation() {
            tabs.push(PlanTab::Accommodation);
        }
        if self.has_restaurant() {
            tabs.push(PlanTab::Restaurant);
        }
        if self.has_transport() {
            tabs.push(PlanTab::Transport);
        }
        tabs
    }

    /// A plan with nothing to show counts as a failed generation.
    pub fn is_renderable(&self) -> bool {
        !self.tabs().is_empty()
    }

    /// The fixed plan shown whenever generation fails, whatever was searched.
    pub fn fallback() -> Self {
        Self {
            bus_name: Some("ZingBus".to_string()),
            bus_cost: Some(85.0),
            hotel_name: Some("Ramada Paris".to_string()),
            hotel_location: Some("23 Avenue de la République, 75011 Paris".to_string()),
            hotel_cost: Some(180.0),
            taxi_name: Some("Uber".to_string()),
            taxi_cost: Some(120.0),
            restaurant_name: Some("Le Jules Verne".to_string()),
            restaurant_cost_per_serving: Some(45.0),
            itinerary: (1..)
                .zip(FALLBACK_DAYS.iter())
                .map(|(day, activities)| DayPlan {
                    day,
                    activities: activities.iter().map(|a| a.to_string()).collect(),
                })
                .collect(),
        }
    }
}

const FALLBACK_DAYS: [[&str; 3]; 7] = [
    ["Check-in at hotel", "Visit Eiffel Tower", "Dinner at Le Jules Verne"],
    ["Louvre Museum", "Seine River Cruise", "Wine tasting"],
    ["Notre-Dame Cathedral", "Latin Quarter exploration", "Evening show"],
    ["Montmartre and Sacré-Cœur", "Local art galleries", "Dinner in Montmartre"],
    [
        "Day trip to Palace of Versailles",
        "Gardens exploration",
        "Evening in Saint-Germain",
    ],
    ["Shopping at Champs-Élysées", "Arc de Triomphe", "Farewell dinner"],
    ["Check-out", "Last-minute souvenir shopping", "Departure"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    Generated,
    Fallback,
}

/// Everything the results view renders for one search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTrip {
    pub search: TripSearch,
    pub plan: TripPlan,
    pub source: PlanSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_day: Option<f64>,
    pub tabs: Vec<PlanTab>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_shows_every_tab() {
        let plan = TripPlan::fallback();
        assert_eq!(
            plan.tabs(),
            vec![
                PlanTab::Itinerary,
                PlanTab::Accommodation,
                PlanTab::Restaurant,
                PlanTab::Transport
            ]
        );
        assert_eq!(plan.itinerary.len(), 7);
    }

    #[test]
    fn test_tabs_follow_present_fields() {
        let plan: TripPlan = serde_json::from_value(json!({
            "hotelName": "Oyo Townhouse",
            "itinerary": [{ "day": 1, "activities": ["Arrive"] }]
        }))
        .unwrap();
        assert_eq!(plan.tabs(), vec![PlanTab::Itinerary, PlanTab::Accommodation]);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let plan: TripPlan = serde_json::from_value(json!({
            "busName": "RedBus",
            "busCost": "40.5",
            "taxiCost": 12,
            "itinerary": [{ "day": "2", "activities": [] }]
        }))
        .unwrap();
        assert_eq!(plan.bus_cost, Some(40.5));
        assert_eq!(plan.taxi_cost, Some(12.0));
        assert_eq!(plan.itinerary[0].day, 2);
        assert!(plan.hotel_cost.is_none());
    }

    #[test]
    fn test_wrong_types_fail_to_parse() {
        let result = serde_json::from_value::<TripPlan>(json!({ "busCost": "cheap" }));
        assert!(result.is_err());

        let result = serde_json::from_value::<TripPlan>(json!({ "itinerary": "day one" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object_is_not_renderable() {
        let plan: TripPlan = serde_json::from_value(json!({})).unwrap();
        assert!(!plan.is_renderable());
    }

    #[test]
    fn test_blank_fields_are_not_present() {
        let plan: TripPlan = serde_json::from_value(json!({
            "hotelName": "  ",
            "busName": "",
            "busCost": 0,
            "restaurantName": "Le Cinq"
        }))
        .unwrap();
        assert_eq!(plan.tabs(), vec![PlanTab::Restaurant]);
    }

    #[test]
    fn test_null_lists_default_to_empty() {
        let plan: TripPlan = serde_json::from_value(json!({
            "hotelName": "Oyo",
            "itinerary": null
        }))
        .unwrap();
        assert!(plan.itinerary.is_empty());

        let day: DayPlan = serde_json::from_value(json!({ "day": 1, "activities": null })).unwrap();
        assert!(day.activities.is_empty());
    }
}
