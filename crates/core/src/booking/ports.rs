//! Booking persistence ports
//!
//! The engine's verdict is advisory: two guests can both see "available"
//! for overlapping dates. Implementations of [`ReservationRepository`] must
//! therefore re-run the availability check inside the same transaction (or
//! critical section) that writes the record, and report a lost race as
//! [`WriteOutcome::Rejected`].

use async_trait::async_trait;
use fleetbook_domain::{
    AvailabilityVerdict, BlockedDaySet, CalendarDay, ReservationRecord, ReservationStatus, Result,
};
use uuid::Uuid;

use crate::availability::AvailabilityEngine;

/// Result of a checked write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The record as stored
    Accepted(ReservationRecord),
    /// The write-time re-check failed; nothing was stored
    Rejected(AvailabilityVerdict),
}

impl WriteOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Reservation storage with atomic check-and-write.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations of a vehicle, any status, in insertion order.
    async fn reservations_for(&self, resource_id: &str) -> Result<Vec<ReservationRecord>>;

    /// Look up one reservation.
    async fn get(&self, id: Uuid) -> Result<Option<ReservationRecord>>;

    /// Insert `record` if [`AvailabilityEngine::check_interval`] still
    /// accepts its interval against the stored reservations and blocked
    /// days, evaluated atomically with the insert.
    async fn insert_checked(
        &self,
        record: ReservationRecord,
        today: CalendarDay,
        engine: &AvailabilityEngine,
    ) -> Result<WriteOutcome>;

    /// Move a reservation to `next`.
    ///
    /// Moving to `Confirmed` re-runs the conflict check against the other
    /// confirmed reservations of the same vehicle, atomically with the
    /// update.
    ///
    /// # Errors
    /// `NotFound` for an unknown id, `InvalidTransition` for a move the
    /// status lifecycle forbids.
    async fn transition_status(
        &self,
        id: Uuid,
        next: ReservationStatus,
        engine: &AvailabilityEngine,
    ) -> Result<WriteOutcome>;
}

/// Owner-blocked day storage.
#[async_trait]
pub trait BlockedDayRepository: Send + Sync {
    /// Blocked days of a vehicle; empty when none were ever set.
    async fn blocked_days(&self, resource_id: &str) -> Result<BlockedDaySet>;

    /// Flip one day. Returns `true` if the day is blocked afterwards.
    async fn toggle_blocked_day(&self, resource_id: &str, day: CalendarDay) -> Result<bool>;
}
