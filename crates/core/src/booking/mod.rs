//! Booking creation and status changes

pub mod ports;
pub mod service;

pub use ports::{BlockedDayRepository, ReservationRepository, WriteOutcome};
pub use service::{BookingRequest, BookingService};
