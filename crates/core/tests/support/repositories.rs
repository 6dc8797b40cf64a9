use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use fleetbook_core::{
    AvailabilityContext, AvailabilityEngine, BlockedDayRepository, ReservationRepository,
    WriteOutcome,
};
use fleetbook_domain::{
    AvailabilityVerdict, BlockedDaySet, CalendarDay, FleetbookError, ReservationRecord,
    ReservationStatus, Result as DomainResult,
};
use uuid::Uuid;

/// In-memory mock implementing both repository ports.
///
/// `stale_reads` makes `reservations_for` return nothing, simulating a
/// caller that read before a competing booking landed. Writes still see the
/// real data, so the write-time re-check is exercised.
#[derive(Default)]
pub struct MockStore {
    reservations: Mutex<Vec<ReservationRecord>>,
    blocked: Mutex<HashMap<String, BlockedDaySet>>,
    stale_reads: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservation(self, record: ReservationRecord) -> Self {
        self.reservations.lock().unwrap().push(record);
        self
    }

    pub fn with_blocked_day(self, resource_id: &str, day: CalendarDay) -> Self {
        self.blocked.lock().unwrap().entry(resource_id.to_string()).or_default().insert(day);
        self
    }

    pub fn with_stale_reads(mut self) -> Self {
        self.stale_reads = true;
        self
    }

    pub fn stored(&self) -> Vec<ReservationRecord> {
        self.reservations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationRepository for MockStore {
    async fn reservations_for(&self, resource_id: &str) -> DomainResult<Vec<ReservationRecord>> {
        if self.stale_reads {
            return Ok(Vec::new());
        }
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.resource_id == resource_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<ReservationRecord>> {
        Ok(self.reservations.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn insert_checked(
        &self,
        record: ReservationRecord,
        today: CalendarDay,
        engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        let mut reservations = self.reservations.lock().unwrap();
        let blocked = self.blocked.lock().unwrap();
        let empty = BlockedDaySet::new();
        let context = AvailabilityContext {
            resource_id: &record.resource_id,
            today,
            reservations: &reservations,
            blocked: blocked.get(&record.resource_id).unwrap_or(&empty),
        };
        let verdict = engine.check_interval(record.interval, &context);
        if !verdict.available {
            return Ok(WriteOutcome::Rejected(verdict));
        }
        reservations.push(record.clone());
        Ok(WriteOutcome::Accepted(record))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        next: ReservationStatus,
        engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        let mut reservations = self.reservations.lock().unwrap();
        let index = reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FleetbookError::NotFound(format!("reservation {id}")))?;

        let mut updated = reservations[index].clone();
        updated.transition_to(next)?;
        if next == ReservationStatus::Confirmed {
            if let Some(conflict) = engine.find_conflict(
                &updated.interval,
                &updated.resource_id,
                &reservations,
                Some(id),
            ) {
                return Ok(WriteOutcome::Rejected(AvailabilityVerdict::already_booked(conflict)));
            }
        }
        reservations[index] = updated.clone();
        Ok(WriteOutcome::Accepted(updated))
    }
}

#[async_trait]
impl BlockedDayRepository for MockStore {
    async fn blocked_days(&self, resource_id: &str) -> DomainResult<BlockedDaySet> {
        Ok(self.blocked.lock().unwrap().get(resource_id).cloned().unwrap_or_default())
    }

    async fn toggle_blocked_day(&self, resource_id: &str, day: CalendarDay) -> DomainResult<bool> {
        Ok(self.blocked.lock().unwrap().entry(resource_id.to_string()).or_default().toggle(day))
    }
}
