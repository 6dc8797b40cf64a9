//! Domain types and models

pub mod blocked;
pub mod calendar;
pub mod date_input;
pub mod listing;
pub mod reservation;
pub mod verdict;

pub use blocked::BlockedDaySet;
pub use calendar::{CalendarDay, DayIter, Interval};
pub use date_input::{DateInput, RawDate};
pub use listing::Listing;
pub use reservation::{ReservationRecord, ReservationStatus};
pub use verdict::{AvailabilityVerdict, ConflictDetail, RejectionReason};
