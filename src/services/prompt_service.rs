use crate::models::search::{SponsorSelection, TripSearch};
use crate::services::place_service::PlaceCatalog;

/// Partner brands the model is told to recommend, by category.
pub const SPONSOR_BUSES: [&str; 2] = ["ZingBus", "RedBus"];
pub const SPONSOR_HOTELS: [&str; 2] = ["Ramada", "Oyo"];
pub const SPONSOR_TAXIS: [&str; 1] = ["Uber"];

const SCHEMA: &str = r#"{
  "busName": string,
  "busCost": number,
  "hotelName": string,
  "hotelLocation": string,
  "hotelCost": number (per night),
  "taxiName": string,
  "taxiCost": number,
  "restaurantName": string,
  "restaurantCostPerServing": number,
  "itinerary": [ { "day": integer, "activities": [string] } ]
}"#;

/// Partners offered for each category. Ticking any brand in a category narrows that
/// category to the ticked brands. A category with nothing ticked keeps every partner.
fn partners(selection: Option<&SponsorSelection>) -> [Vec<&'static str>; 3] {
    let Some(selection) = selection else {
        return [SPONSOR_BUSES.to_vec(), SPONSOR_HOTELS.to_vec(), SPONSOR_TAXIS.to_vec()];
    };

    let narrow = |all: &[&'static str], ticked: &[bool]| {
        let chosen: Vec<&'static str> = all
            .iter()
            .zip(ticked)
            .filter_map(|(name, on)| on.then_some(*name))
            .collect();
        if chosen.is_empty() {
            all.to_vec()
        } else {
            chosen
        }
    };

    [
        narrow(&SPONSOR_BUSES, &[selection.zing_bus, selection.red_bus]),
        narrow(&SPONSOR_HOTELS, &[selection.ramada, selection.oyo]),
        narrow(&SPONSOR_TAXIS, &[selection.uber]),
    ]
}

/// Build the single prompt sent to the text generation endpoint.
pub fn build_itinerary_prompt(search: &TripSearch, places: &PlaceCatalog) -> String {
    let from = places.starting_point_label(&search.starting_point);
    let to = places.destination_label(&search.destination);
    let days = search.days();

    let mut prompt = format!(
        "You are a travel planner. Plan a {days}-day trip from {from} to {to}, \
         from {start} to {end}, for {travelers} traveler(s).",
        start = search.date_range.from.format("%Y-%m-%d"),
        end = search.date_range.to.format("%Y-%m-%d"),
        travelers = search.travelers,
    );
    if let Some(budget) = search.budget {
        prompt.push_str(&format!(" The total budget is {:.0} USD.", budget));
    }
    let styles = search
        .preferences
        .as_ref()
        .map(|preferences| preferences.selected())
        .unwrap_or_default();
    if !styles.is_empty() {
        prompt.push_str(&format!(
            " Favour activities for these interests: {}.",
            styles.join(", ")
        ));
    }

    let [buses, hotels, taxis] = partners(search.sponsors.as_ref());
    prompt.push_str(&format!(
        "\nRecommend a bus from our partners ({buses}), a hotel from our partners ({hotels}), \
         a taxi service from our partners ({taxis}), and one restaurant at the destination.\
         \nRespond ONLY with a JSON object in exactly this format, with costs in USD and one \
         itinerary entry for each of the {days} days:\n{schema}",
        buses = buses.join(", "),
        hotels = hotels.join(", "),
        taxis = taxis.join(", "),
        schema = SCHEMA,
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search::{DateRange, TravelPreferences};
    use chrono::NaiveDate;

    fn search() -> TripSearch {
        TripSearch {
            starting_point: "delhi".to_string(),
            destination: "paris".to_string(),
            date_range: DateRange {
                from: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                to: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
            },
            travelers: 2,
            budget: Some(3000.0),
            preferences: None,
            sponsors: None,
        }
    }

    #[test]
    fn test_prompt_mentions_route_dates_and_sponsors() {
        let prompt = build_itinerary_prompt(&search(), &PlaceCatalog::default());
        assert!(prompt.contains("7-day trip from Delhi, India to Paris, France"));
        assert!(prompt.contains("2025-05-01 to 2025-05-07"));
        assert!(prompt.contains("2 traveler(s)"));
        assert!(prompt.contains("3000 USD"));
        for sponsor in ["ZingBus", "RedBus", "Ramada", "Oyo", "Uber"] {
            assert!(prompt.contains(sponsor), "missing {}", sponsor);
        }
        assert!(prompt.contains("\"restaurantCostPerServing\""));
    }

    #[test]
    fn test_unknown_places_are_used_verbatim() {
        let mut search = search();
        search.destination = "Reykjavik, Iceland".to_string();
        search.budget = None;
        let prompt = build_itinerary_prompt(&search, &PlaceCatalog::default());
        assert!(prompt.contains("to Reykjavik, Iceland"));
        assert!(!prompt.contains("budget"));
    }

    #[test]
    fn test_prompt_lists_chosen_interests() {
        let mut search = search();
        search.preferences = Some(TravelPreferences {
            culture: true,
            food: true,
            ..Default::default()
        });
        let prompt = build_itinerary_prompt(&search, &PlaceCatalog::default());
        assert!(prompt.contains("interests: culture, food."));
        assert!(!prompt.contains("adventure"));
    }

    #[test]
    fn test_ticked_sponsors_narrow_their_category() {
        let mut search = search();
        search.sponsors = Some(SponsorSelection {
            red_bus: true,
            ..Default::default()
        });
        let prompt = build_itinerary_prompt(&search, &PlaceCatalog::default());
        assert!(prompt.contains("a bus from our partners (RedBus)"));
        assert!(!prompt.contains("ZingBus"));
        // Nothing ticked for hotels or taxis, so all of them stay.
        assert!(prompt.contains("a hotel from our partners (Ramada, Oyo)"));
        assert!(prompt.contains("a taxi service from our partners (Uber)"));
    }
}
