//! Booking availability engine
//!
//! Leaves first: [`normalize`] turns raw dates into calendar days,
//! [`conflict`] decides overlap of two inclusive intervals, [`blocked`]
//! answers owner-blocked lookups, and [`engine`] composes them into a
//! verdict.

pub mod blocked;
pub mod conflict;
pub mod engine;
pub mod normalize;

pub use blocked::{count_blocked_days, first_blocked_day, is_blocked};
pub use conflict::conflicts;
pub use engine::{AvailabilityContext, AvailabilityEngine};
pub use normalize::{normalize, DayZone};
