use std::fs;
use std::path::Path;

use crate::models::location::Place;

const DESTINATIONS: &[(&str, &str)] = &[
    ("agra", "Agra, India"),
    ("amsterdam", "Amsterdam, Netherlands"),
    ("athens", "Athens, Greece"),
    ("bali", "Bali, Indonesia"),
    ("bangkok", "Bangkok, Thailand"),
    ("barcelona", "Barcelona, Spain"),
    ("berlin", "Berlin, Germany"),
    ("boston", "Boston, USA"),
    ("cairo", "Cairo, Egypt"),
    ("cancun", "Cancun, Mexico"),
    ("capetown", "Cape Town, South Africa"),
    ("chicago", "Chicago, USA"),
    ("dubai", "Dubai, UAE"),
    ("dublin", "Dublin, Ireland"),
    ("florence", "Florence, Italy"),
    ("hanoi", "Hanoi, Vietnam"),
    ("hawaii", "Hawaii, USA"),
    ("hongkong", "Hong Kong"),
    ("istanbul", "Istanbul, Turkey"),
    ("kyoto", "Kyoto, Japan"),
    ("lasvegas", "Las Vegas, USA"),
    ("lisbon", "Lisbon, Portugal"),
    ("london", "London, UK"),
    ("losangeles", "Los Angeles, USA"),
    ("madrid", "Madrid, Spain"),
    ("maldives", "Maldives"),
    ("marrakech", "Marrakech, Morocco"),
    ("miami", "Miami, USA"),
    ("milan", "Milan, Italy"),
    ("montreal", "Montreal, Canada"),
    ("moscow", "Moscow, Russia"),
    ("mumbai", "Mumbai, India"),
    ("neworleans", "New Orleans, USA"),
    ("newyork", "New York, USA"),
    ("paris", "Paris, France"),
    ("prague", "Prague, Czech Republic"),
    ("rio", "Rio de Janeiro, Brazil"),
    ("rome", "Rome, Italy"),
    ("sanfrancisco", "San Francisco, USA"),
    ("santorini", "Santorini, Greece"),
    ("seattle", "Seattle, USA"),
    ("seoul", "Seoul, South Korea"),
    ("shanghai", "Shanghai, China"),
    ("singapore", "Singapore"),
    ("sydney", "Sydney, Australia"),
    ("taipei", "Taipei, Taiwan"),
    ("tokyo", "Tokyo, Japan"),
    ("toronto", "Toronto, Canada"),
    ("vancouver", "Vancouver, Canada"),
    ("venice", "Venice, Italy"),
    ("vienna", "Vienna, Austria"),
    ("zurich", "Zurich, Switzerland"),
];

const STARTING_POINTS: &[(&str, &str)] = &[
    ("bangalore", "Bangalore, India"),
    ("berlin", "Berlin, Germany"),
    ("boston", "Boston, USA"),
    ("chicago", "Chicago, USA"),
    ("delhi", "Delhi, India"),
    ("dubai", "Dubai, UAE"),
    ("hongkong", "Hong Kong"),
    ("london", "London, UK"),
    ("losangeles", "Los Angeles, USA"),
    ("melbourne", "Melbourne, Australia"),
    ("mexico", "Mexico City, Mexico"),
    ("miami", "Miami, USA"),
    ("montreal", "Montreal, Canada"),
    ("mumbai", "Mumbai, India"),
    ("newyork", "New York, USA"),
    ("paris", "Paris, France"),
    ("sanfrancisco", "San Francisco, USA"),
    ("singapore", "Singapore"),
    ("sydney", "Sydney, Australia"),
    ("tokyo", "Tokyo, Japan"),
    ("toronto", "Toronto, Canada"),
];

fn to_places(entries: &[(&str, &str)]) -> Vec<Place> {
    entries
        .iter()
        .map(|(value, label)| Place {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Case-insensitive substring match on value or label, capped at `limit`.
pub fn search_places(places: &[Place], search: Option<&str>, limit: Option<usize>) -> Vec<Place> {
    let needle = search.unwrap_or("").trim().to_lowercase();
    places
        .iter()
        .filter(|place| {
            needle.is_empty()
                || place.value.to_lowercase().contains(&needle)
                || place.label.to_lowercase().contains(&needle)
        })
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    pub destinations: Vec<Place>,
    pub starting_points: Vec<Place>,
}

impl Default for PlaceCatalog {
    fn default() -> Self {
        Self {
            destinations: to_places(DESTINATIONS),
            starting_points: to_places(STARTING_POINTS),
        }
    }
}

impl PlaceCatalog {
    /// Load destinations from a JSON array of places. Any failure keeps the built-in list.
    pub fn load(destinations_file: Option<&Path>) -> Self {
        let mut catalog = Self::default();
        let Some(path) = destinations_file else {
            return catalog;
        };

        let loaded = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| serde_json::from_str::<Vec<Place>>(&raw).map_err(|e| e.to_string()));

        match loaded {
            Ok(places) if !places.is_empty() => {
                log::info!("Loaded {} destinations from {}", places.len(), path.display());
                catalog.destinations = places;
            }
            Ok(_) => log::warn!(
                "Destinations file {} is empty, using built-in list",
                path.display()
            ),
            Err(e) => log::warn!(
                "Failed to load destinations from {}: {}. Using built-in list",
                path.display(),
                e
            ),
        }
        catalog
    }

    /// Display label for a selection key, or the input itself when it is not a known key.
    pub fn destination_label<'a>(&'a self, value: &'a str) -> &'a str {
        label_for(&self.destinations, value)
    }

    pub fn starting_point_label<'a>(&'a self, value: &'a str) -> &'a str {
        label_for(&self.starting_points, value)
    }
}

fn label_for<'a>(places: &'a [Place], value: &'a str) -> &'a str {
    places
        .iter()
        .find(|place| place.value == value)
        .map(|place| place.label.as_str())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_search_matches_value_and_label() {
        let catalog = PlaceCatalog::default();
        let found = search_places(&catalog.destinations, Some("ITALY"), None);
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|p| p.label.ends_with("Italy")));

        let found = search_places(&catalog.destinations, Some("newyork"), None);
        assert_eq!(found[0].label, "New York, USA");
    }

    #[test]
    fn test_limit_applies() {
        let catalog = PlaceCatalog::default();
        assert_eq!(search_places(&catalog.starting_points, None, Some(3)).len(), 3);
        assert_eq!(search_places(&catalog.starting_points, None, None).len(), 21);
    }

    #[test]
    fn test_labels_fall_back_to_input() {
        let catalog = PlaceCatalog::default();
        assert_eq!(catalog.destination_label("paris"), "Paris, France");
        assert_eq!(catalog.starting_point_label("delhi"), "Delhi, India");
        assert_eq!(catalog.destination_label("Atlantis"), "Atlantis");
    }

    #[test]
    fn test_load_from_json_file() {
        let path = std::env::temp_dir().join(format!("destinations-{}.json", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"[{{"value": "goa", "label": "Goa, India"}}]"#).unwrap();

        let catalog = PlaceCatalog::load(Some(&path));
        assert_eq!(catalog.destinations.len(), 1);
        assert_eq!(catalog.destination_label("goa"), "Goa, India");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_bad_file_keeps_builtin_list() {
        let catalog = PlaceCatalog::load(Some(Path::new("/nonexistent/destinations.json")));
        assert_eq!(catalog.destinations.len(), DESTINATIONS.len());
    }
}
