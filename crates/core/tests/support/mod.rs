//! Shared test helpers for `fleetbook-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! booking and calendar tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use std::sync::Arc;

use fleetbook_core::{AvailabilityEngine, DayZone, MockClock};
use fleetbook_domain::{CalendarDay, Interval, ReservationRecord, ReservationStatus, ScanOrder};

pub use repositories::MockStore;

pub fn day(s: &str) -> CalendarDay {
    s.parse().expect("valid test day")
}

pub fn interval(start: &str, end: &str) -> Interval {
    Interval::new(day(start), day(end))
}

pub fn confirmed(resource: &str, start: &str, end: &str) -> ReservationRecord {
    ReservationRecord::new(resource, interval(start, end), ReservationStatus::Confirmed)
}

pub fn pending(resource: &str, start: &str, end: &str) -> ReservationRecord {
    ReservationRecord::new(resource, interval(start, end), ReservationStatus::Pending)
}

pub fn utc_engine() -> AvailabilityEngine {
    AvailabilityEngine::new(DayZone::Utc, ScanOrder::Input)
}

pub fn clock_on(today: &str) -> Arc<MockClock> {
    Arc::new(MockClock::at_noon(day(today)))
}
