pub mod account;
pub mod bookings;
pub mod chat;
pub mod location;
pub mod notification;
pub mod plan;
pub mod search;
pub mod sponsor;
pub mod trip;
