//! # Fleetbook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The booking availability engine
//! - Port/adapter interfaces (traits) for reservations and blocked days
//! - Booking, host calendar and catalog search services
//!
//! ## Architecture Principles
//! - Only depends on `fleetbook-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - "Today" is injected through [`Clock`]

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod clock;
pub mod search;

// Re-export specific items to avoid ambiguity
pub use availability::{conflicts, AvailabilityContext, AvailabilityEngine, DayZone};
pub use booking::{
    BlockedDayRepository, BookingRequest, BookingService, ReservationRepository, WriteOutcome,
};
pub use calendar::{CalendarCell, DayState, HostCalendarService};
pub use clock::{Clock, MockClock, SystemClock};
pub use search::{CatalogSearch, SearchCriteria, SortOrder};
