use parking_lot::RwLock;
use std::sync::Arc;

use crate::models::{
    bookings::{Booking, BookingStatus},
    sponsor::Sponsor,
    trip::{TripStatus, UserTrip},
};

/// Process-local sample data. Nothing is written anywhere; a restart reseeds it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub bookings: RwLock<Vec<Booking>>,
    pub sponsors: RwLock<Vec<Sponsor>>,
    pub trips: RwLock<Vec<UserTrip>>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self {
            bookings: RwLock::new(sample_bookings()),
            sponsors: RwLock::new(sample_sponsors()),
            trips: RwLock::new(sample_trips()),
        }
    }
}

pub fn create_memory_store() -> Arc<MemoryStore> {
    let store = MemoryStore::seeded();
    log::info!(
        "Seeded in-memory store: {} bookings, {} sponsors, {} trips",
        store.bookings.read().len(),
        store.sponsors.read().len(),
        store.trips.read().len()
    );
    Arc::new(store)
}

fn booking(
    id: &str,
    user: &str,
    destination: &str,
    dates: &str,
    amount: u32,
    status: BookingStatus,
) -> Booking {
    Booking {
        id: id.to_string(),
        user: user.to_string(),
        destination: destination.to_string(),
        dates: dates.to_string(),
        amount,
        status,
    }
}

pub fn sample_bookings() -> Vec<Booking> {
    use BookingStatus::*;

    vec![
        booking("B001", "John Smith", "Paris, France", "May 15 - May 22, 2023", 2350, Confirmed),
        booking("B002", "Sarah Johnson", "Bali, Indonesia", "Aug 10 - Aug 20, 2023", 3100, Pending),
        booking("B003", "Michael Brown", "New York, USA", "Dec 5 - Dec 12, 2022", 2800, Completed),
        booking("B004", "Emily Davis", "Tokyo, Japan", "Mar 1 - Mar 10, 2023", 3200, Cancelled),
        booking("B005", "David Wilson", "London, UK", "Jun 20 - Jun 28, 2023", 2750, Confirmed),
    ]
}

fn sponsor(id: &str, name: &str, category: &str, commission: &str, active: bool) -> Sponsor {
    Sponsor {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        commission: commission.to_string(),
        active,
    }
}

pub fn sample_sponsors() -> Vec<Sponsor> {
    vec![
        sponsor("S001", "ZingBus", "Transportation", "12%", true),
        sponsor("S002", "RedBus", "Transportation", "10%", true),
        sponsor("S003", "Ramada", "Accommodation", "15%", true),
        sponsor("S004", "Oyo", "Accommodation", "18%", true),
        sponsor("S005", "Uber", "Local Transport", "8%", false),
    ]
}

fn trip(
    id: u32,
    destination: &str,
    dates: &str,
    total_cost: u32,
    status: TripStatus,
    image: &str,
) -> UserTrip {
    UserTrip {
        id,
        destination: destination.to_string(),
        dates: dates.to_string(),
        total_cost,
        status,
        image: image.to_string(),
    }
}

pub fn sample_trips() -> Vec<UserTrip> {
    vec![
        trip(
            1,
            "Paris, France",
            "May 15 - May 22, 2023",
            2350,
            TripStatus::Upcoming,
            concat!(
                "https://images.unsplash.com/photo-1502602898657-3e91760cbb34",
                "?q=80&w=2073&auto=format&fit=crop"
            ),
        ),
        trip(
            2,
            "Bali, Indonesia",
            "Aug 10 - Aug 20, 2023",
            3100,
            TripStatus::Upcoming,
            concat!(
                "https://images.unsplash.com/photo-1537996194471-e657df975ab4",
                "?q=80&w=2938&auto=format&fit=crop"
            ),
        ),
        trip(
            3,
            "New York, USA",
            "Dec 5 - Dec 12, 2022",
            2800,
            TripStatus::Completed,
            concat!(
                "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
                "?q=80&w=2070&auto=format&fit=crop"
            ),
        ),
        trip(
            4,
            "Tokyo, Japan",
            "Mar 1 - Mar 10, 2022",
            3200,
            TripStatus::Completed,
            concat!(
                "https://images.unsplash.com/photo-1536098561742-ca998e48cbcc",
                "?q=80&w=2036&auto=format&fit=crop"
            ),
        ),
    ]
}
