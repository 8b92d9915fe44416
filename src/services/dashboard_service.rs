use crate::db::memory::MemoryStore;
use crate::models::{
    notification::Notification,
    trip::{TripStatus, UserTrip},
};

pub struct DashboardService;

impl DashboardService {
    pub fn list_trips(store: &MemoryStore, status: Option<TripStatus>) -> Vec<UserTrip> {
        store
            .trips
            .read()
            .iter()
            .filter(|trip| status.map_or(true, |status| trip.status == status))
            .cloned()
            .collect()
    }

    /// Drop a trip from the dashboard. Returns `None` when the id is unknown.
    pub fn delete_trip(store: &MemoryStore, trip_id: u32) -> Option<Notification> {
        let mut trips = store.trips.write();
        let before = trips.len();
        trips.retain(|trip| trip.id != trip_id);
        if trips.len() == before {
            return None;
        }
        Some(Notification::info(
            "Trip Deleted",
            "The trip has been removed from your account.",
        ))
    }
}
