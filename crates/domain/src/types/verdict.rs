//! Availability decision output

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::calendar::{CalendarDay, Interval};
use super::reservation::ReservationRecord;
use crate::impl_domain_status_conversions;

/// Why a candidate interval cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum RejectionReason {
    /// Pickup day is before today
    PastDate,
    /// Return day is before pickup day
    InvalidRange,
    /// Pickup and return on the same day
    SameDay,
    /// The range includes a day the owner blocked
    HostBlocked,
    /// The range overlaps a confirmed reservation
    AlreadyBooked,
}

impl_domain_status_conversions!(RejectionReason {
    PastDate => "past_date",
    InvalidRange => "invalid_range",
    SameDay => "same_day",
    HostBlocked => "host_blocked",
    AlreadyBooked => "already_booked",
});

impl RejectionReason {
    /// Short user-facing explanation.
    pub const fn description(self) -> &'static str {
        match self {
            Self::PastDate => "Pickup date cannot be in the past",
            Self::InvalidRange => "Return date must be after pickup date",
            Self::SameDay => "Bookings must be at least 1 day",
            Self::HostBlocked => "The host has blocked one or more of the selected dates",
            Self::AlreadyBooked => "The vehicle is already booked for the selected dates",
        }
    }
}

/// The reservation a candidate collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ConflictDetail {
    pub reservation_id: Uuid,
    pub interval: Interval,
}

impl From<&ReservationRecord> for ConflictDetail {
    fn from(record: &ReservationRecord) -> Self {
        Self { reservation_id: record.id, interval: record.interval }
    }
}

/// Outcome of an availability check.
///
/// `reason` is `None` exactly when `available` is true. `blocked_date` is
/// set for [`RejectionReason::HostBlocked`] and `conflict` for
/// [`RejectionReason::AlreadyBooked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AvailabilityVerdict {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_date: Option<CalendarDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictDetail>,
}

impl AvailabilityVerdict {
    pub const fn available() -> Self {
        Self { available: true, reason: None, blocked_date: None, conflict: None }
    }

    pub const fn rejected(reason: RejectionReason) -> Self {
        Self { available: false, reason: Some(reason), blocked_date: None, conflict: None }
    }

    pub const fn host_blocked(day: CalendarDay) -> Self {
        Self {
            available: false,
            reason: Some(RejectionReason::HostBlocked),
            blocked_date: Some(day),
            conflict: None,
        }
    }

    pub fn already_booked(record: &ReservationRecord) -> Self {
        Self {
            available: false,
            reason: Some(RejectionReason::AlreadyBooked),
            blocked_date: None,
            conflict: Some(ConflictDetail::from(record)),
        }
    }

    pub const fn is_available(&self) -> bool {
        self.available
    }
}
