use crate::db::memory::MemoryStore;
use crate::models::{
    bookings::{AdminSummary, Booking, BookingStatus},
    notification::{Notification, Updated},
    sponsor::Sponsor,
};

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Free-text match over id, user and destination, ANDed with an exact status match.
/// The term is used as typed, surrounding spaces included.
pub fn filter_bookings(
    bookings: &[Booking],
    search: &str,
    status: Option<BookingStatus>,
) -> Vec<Booking> {
    let needle = search.to_lowercase();
    bookings
        .iter()
        .filter(|booking| {
            needle.is_empty()
                || contains_ignore_case(&booking.id, &needle)
                || contains_ignore_case(&booking.user, &needle)
                || contains_ignore_case(&booking.destination, &needle)
        })
        .filter(|booking| status.map_or(true, |status| booking.status == status))
        .cloned()
        .collect()
}

pub fn filter_sponsors(sponsors: &[Sponsor], search: &str) -> Vec<Sponsor> {
    let needle = search.to_lowercase();
    sponsors
        .iter()
        .filter(|sponsor| {
            needle.is_empty()
                || contains_ignore_case(&sponsor.name, &needle)
                || contains_ignore_case(&sponsor.category, &needle)
        })
        .cloned()
        .collect()
}

pub struct AdminService;

impl AdminService {
    pub fn list_bookings(
        store: &MemoryStore,
        search: &str,
        status: Option<BookingStatus>,
    ) -> Vec<Booking> {
        filter_bookings(&store.bookings.read(), search, status)
    }

    /// Set a booking's status. Returns `None` when no booking has that id.
    pub fn update_booking_status(
        store: &MemoryStore,
        booking_id: &str,
        status: BookingStatus,
    ) -> Option<Updated<Booking>> {
        let mut bookings = store.bookings.write();
        let booking = bookings.iter_mut().find(|booking| booking.id == booking_id)?;
        booking.status = status;

        Some(Updated {
            item: booking.clone(),
            notification: Notification::info(
                "Status Updated",
                format!("Booking {} has been updated to {}", booking_id, status),
            ),
        })
    }

    pub fn list_sponsors(store: &MemoryStore, search: &str) -> Vec<Sponsor> {
        filter_sponsors(&store.sponsors.read(), search)
    }

    /// Flip a sponsor's active flag. Returns `None` when no sponsor has that id.
    pub fn toggle_sponsor(store: &MemoryStore, sponsor_id: &str) -> Option<Updated<Sponsor>> {
        let mut sponsors = store.sponsors.write();
        let sponsor = sponsors.iter_mut().find(|sponsor| sponsor.id == sponsor_id)?;
        sponsor.active = !sponsor.active;

        let state = if sponsor.active { "active" } else { "inactive" };
        Some(Updated {
            item: sponsor.clone(),
            notification: Notification::info(
                "Sponsor Status Updated",
                format!("{} is now {}", sponsor.name, state),
            ),
        })
    }

    pub fn summary(store: &MemoryStore) -> AdminSummary {
        let bookings = store.bookings.read();
        let sponsors = store.sponsors.read();
        AdminSummary {
            total_bookings: bookings.len(),
            total_revenue: bookings.iter().map(|booking| u64::from(booking.amount)).sum(),
            active_sponsors: sponsors.iter().filter(|sponsor| sponsor.active).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{sample_bookings, sample_sponsors};

    fn ids(bookings: &[Booking]) -> Vec<&str> {
        bookings.iter().map(|booking| booking.id.as_str()).collect()
    }

    #[test]
    fn test_search_paris_returns_b001() {
        let found = filter_bookings(&sample_bookings(), "Paris", None);
        assert_eq!(ids(&found), vec!["B001"]);
        assert_eq!(found[0].status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        assert!(filter_bookings(&sample_bookings(), " Paris", None).is_empty());
        assert_eq!(filter_bookings(&sample_bookings(), "", None).len(), 5);
    }

    #[test]
    fn test_status_filter_cancelled_returns_b004() {
        let found = filter_bookings(&sample_bookings(), "", Some(BookingStatus::Cancelled));
        assert_eq!(ids(&found), vec!["B004"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let bookings = sample_bookings();
        assert_eq!(ids(&filter_bookings(&bookings, "b003", None)), vec!["B003"]);
        assert_eq!(ids(&filter_bookings(&bookings, "EMILY", None)), vec!["B004"]);
        assert_eq!(filter_bookings(&bookings, "", None).len(), 5);
    }

    #[test]
    fn test_search_and_status_are_anded() {
        let bookings = sample_bookings();
        assert!(filter_bookings(&bookings, "Paris", Some(BookingStatus::Pending)).is_empty());
        assert_eq!(
            ids(&filter_bookings(&bookings, "o", Some(BookingStatus::Confirmed))),
            vec!["B001", "B005"]
        );
    }

    #[test]
    fn test_sponsor_search_matches_category() {
        let found = filter_sponsors(&sample_sponsors(), "accommodation");
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ramada", "Oyo"]);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let store = MemoryStore::seeded();
        let first = AdminService::toggle_sponsor(&store, "S005").unwrap();
        assert!(first.item.active);
        assert_eq!(first.notification.description, "Uber is now active");

        let second = AdminService::toggle_sponsor(&store, "S005").unwrap();
        assert!(!second.item.active);
        assert_eq!(second.notification.description, "Uber is now inactive");
        assert_eq!(store.sponsors.read()[4], sample_sponsors()[4]);
    }

    #[test]
    fn test_update_status_mutates_store() {
        let store = MemoryStore::seeded();
        let updated =
            AdminService::update_booking_status(&store, "B002", BookingStatus::Confirmed).unwrap();
        assert_eq!(
            updated.notification.description,
            "Booking B002 has been updated to Confirmed"
        );
        assert_eq!(store.bookings.read()[1].status, BookingStatus::Confirmed);
        let missing = AdminService::update_booking_status(&store, "B999", BookingStatus::Pending);
        assert!(missing.is_none());
    }

    #[test]
    fn test_summary_counts() {
        let store = MemoryStore::seeded();
        let summary = AdminService::summary(&store);
        assert_eq!(summary.total_bookings, 5);
        assert_eq!(summary.total_revenue, 14200);
        assert_eq!(summary.active_sponsors, 4);
    }
}
