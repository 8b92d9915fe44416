use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Inclusive day count: the 1st through the 7th is a 7 day trip.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

fn default_travelers() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSearch {
    pub starting_point: String,
    pub destination: String,
    pub date_range: DateRange,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<TravelPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<SponsorSelection>,
}

/// Trip styles ticked on the search form. Unlisted styles are unticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPreferences {
    pub adventure: bool,
    pub relaxation: bool,
    pub culture: bool,
    pub food: bool,
    pub shopping: bool,
}

impl TravelPreferences {
    pub fn selected(&self) -> Vec<&'static str> {
        [
            (self.adventure, "adventure"),
            (self.relaxation, "relaxation"),
            (self.culture, "culture"),
            (self.food, "food"),
            (self.shopping, "shopping"),
        ]
        .into_iter()
        .filter_map(|(ticked, name)| ticked.then_some(name))
        .collect()
    }
}

/// Partner brands the traveler asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SponsorSelection {
    pub zing_bus: bool,
    pub red_bus: bool,
    pub ramada: bool,
    pub oyo: bool,
    pub uber: bool,
}

impl TripSearch {
    /// Check the form before it is accepted. The message is shown to the user as is.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_point.trim().is_empty() {
            return Err("Please select a starting point".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("Please select a destination".to_string());
        }
        if self.date_range.to < self.date_range.from {
            return Err("End date must be on or after the start date".to_string());
        }
        if self.travelers == 0 {
            return Err("At least one traveler is required".to_string());
        }
        Ok(())
    }

    pub fn days(&self) -> i64 {
        self.date_range.days()
    }
}

/// State carried to the results view after a valid submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsState {
    pub search: TripSearch,
}
