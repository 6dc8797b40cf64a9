//! Availability decision
//!
//! Composes normalization, the blocked-day scan and the conflict predicate
//! into a single verdict. Checks run in a fixed order and the first failing
//! check wins:
//!
//! 1. both endpoints normalize (otherwise `InvalidDate` error)
//! 2. pickup is not before today (`PastDate`)
//! 3. return is not before pickup (`InvalidRange`) and not on the same day
//!    (`SameDay`)
//! 4. no day of the span is owner-blocked (`HostBlocked`)
//! 5. no confirmed reservation of the vehicle overlaps (`AlreadyBooked`)
//!
//! The engine holds no mutable state. A positive verdict is not a hold;
//! writers must re-run [`AvailabilityEngine::check_interval`] atomically
//! with the write.

use fleetbook_domain::constants::MIN_STAY_NIGHTS;
use fleetbook_domain::{
    AvailabilityVerdict, BlockedDaySet, CalendarDay, DateInput, EngineConfig, Interval,
    RejectionReason, ReservationRecord, Result, ScanOrder,
};
use tracing::debug;
use uuid::Uuid;

use super::blocked::first_blocked_day;
use super::conflict::conflicts;
use super::normalize::{normalize, DayZone};

/// Everything the decision needs besides the candidate itself.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityContext<'a> {
    pub resource_id: &'a str,
    pub today: CalendarDay,
    /// Reservations of any status. Only confirmed ones for `resource_id`
    /// are considered.
    pub reservations: &'a [ReservationRecord],
    pub blocked: &'a BlockedDaySet,
}

/// Stateless booking availability checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailabilityEngine {
    zone: DayZone,
    scan_order: ScanOrder,
}

impl AvailabilityEngine {
    pub const fn new(zone: DayZone, scan_order: ScanOrder) -> Self {
        Self { zone, scan_order }
    }

    /// Build an engine from configuration.
    ///
    /// # Errors
    /// Returns `FleetbookError::Config` for an unknown time zone.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let zone = match config.time_zone.as_deref() {
            Some(spec) => DayZone::parse(spec)?,
            None => DayZone::Local,
        };
        Ok(Self::new(zone, config.scan_order))
    }

    pub const fn zone(&self) -> &DayZone {
        &self.zone
    }

    pub const fn scan_order(&self) -> ScanOrder {
        self.scan_order
    }

    /// Normalize a caller-supplied date in this engine's zone.
    pub fn normalize(&self, input: &DateInput) -> Result<CalendarDay> {
        normalize(input, &self.zone)
    }

    /// Full decision from raw endpoints.
    ///
    /// # Errors
    /// Returns `FleetbookError::InvalidDate` if either endpoint cannot be
    /// normalized. All business-rule rejections are `Ok` verdicts.
    pub fn check(
        &self,
        start: &DateInput,
        end: &DateInput,
        context: &AvailabilityContext<'_>,
    ) -> Result<AvailabilityVerdict> {
        let start = self.normalize(start)?;
        let end = self.normalize(end)?;
        Ok(self.check_interval(Interval::new(start, end), context))
    }

    /// Decision for an already-normalized candidate.
    pub fn check_interval(
        &self,
        candidate: Interval,
        context: &AvailabilityContext<'_>,
    ) -> AvailabilityVerdict {
        let verdict = self.evaluate(candidate, context);
        debug!(
            resource_id = %context.resource_id,
            candidate = %candidate,
            available = verdict.available,
            reason = ?verdict.reason,
            "availability evaluated"
        );
        verdict
    }

    fn evaluate(
        &self,
        candidate: Interval,
        context: &AvailabilityContext<'_>,
    ) -> AvailabilityVerdict {
        if candidate.start < context.today {
            return AvailabilityVerdict::rejected(RejectionReason::PastDate);
        }

        if candidate.end < candidate.start {
            return AvailabilityVerdict::rejected(RejectionReason::InvalidRange);
        }
        if candidate.nights() < MIN_STAY_NIGHTS {
            return AvailabilityVerdict::rejected(RejectionReason::SameDay);
        }

        if let Some(day) = first_blocked_day(&candidate, context.blocked) {
            return AvailabilityVerdict::host_blocked(day);
        }

        match self.find_conflict(&candidate, context.resource_id, context.reservations, None) {
            Some(record) => AvailabilityVerdict::already_booked(record),
            None => AvailabilityVerdict::available(),
        }
    }

    /// First confirmed reservation of `resource_id` overlapping `candidate`.
    ///
    /// With [`ScanOrder::Input`] this is the first hit in slice order. With
    /// [`ScanOrder::Chronological`] records are visited by start day (ties
    /// keep slice order) and the scan stops once records start after the
    /// candidate ends. `exclude` skips one reservation, used when re-checking
    /// a record against its siblings.
    pub fn find_conflict<'a>(
        &self,
        candidate: &Interval,
        resource_id: &str,
        reservations: &'a [ReservationRecord],
        exclude: Option<Uuid>,
    ) -> Option<&'a ReservationRecord> {
        let mut relevant = reservations.iter().filter(|record| {
            record.is_confirmed()
                && record.resource_id == resource_id
                && exclude.map_or(true, |id| record.id != id)
        });

        match self.scan_order {
            ScanOrder::Input => relevant.find(|record| conflicts(candidate, &record.interval)),
            ScanOrder::Chronological => {
                let mut sorted: Vec<&ReservationRecord> = relevant.collect();
                sorted.sort_by_key(|record| record.interval.start);
                sorted
                    .into_iter()
                    .take_while(|record| record.interval.start <= candidate.end)
                    .find(|record| conflicts(candidate, &record.interval))
            }
        }
    }
}
