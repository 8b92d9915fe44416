use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Upcoming,
    Completed,
}

/// A trip shown on the traveler dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrip {
    pub id: u32,
    pub destination: String,
    pub dates: String,
    pub total_cost: u32,
    pub status: TripStatus,
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TripQuery {
    pub status: Option<TripStatus>,
}
