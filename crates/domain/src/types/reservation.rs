//! Reservation records and their status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::calendar::Interval;
use crate::errors::{FleetbookError, Result};
use crate::impl_domain_status_conversions;

/// Status of a reservation.
///
/// Only `Confirmed` reservations block other bookings. `Pending` and
/// `Cancelled` are shown on the host calendar for visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl_domain_status_conversions!(ReservationStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Cancelled => "cancelled",
});

impl ReservationStatus {
    /// Whether a record in this status may move to `next`.
    ///
    /// Allowed: pending -> confirmed, pending -> cancelled,
    /// confirmed -> cancelled. Cancelled is terminal.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled) | (Self::Confirmed, Self::Cancelled)
        )
    }

    pub const fn blocks_availability(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// One booking of one vehicle.
///
/// Records are never deleted; they only change status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ReservationRecord {
    pub id: Uuid,
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
    pub interval: Interval,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl ReservationRecord {
    /// Create a record with a fresh time-ordered id.
    pub fn new(
        resource_id: impl Into<String>,
        interval: Interval,
        status: ReservationStatus,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            resource_id: resource_id.into(),
            guest_id: None,
            interval,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn with_guest(mut self, guest_id: impl Into<String>) -> Self {
        self.guest_id = Some(guest_id.into());
        self
    }

    pub const fn is_confirmed(&self) -> bool {
        self.status.blocks_availability()
    }

    /// Move the record to `next`, enforcing the status lifecycle.
    pub fn transition_to(&mut self, next: ReservationStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(FleetbookError::InvalidTransition(format!(
                "reservation {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}
