use serde::{Deserialize, Serialize};

/// A partner brand the itinerary prompt recommends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub commission: String,
    pub active: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SponsorQuery {
    pub search: Option<String>,
}
