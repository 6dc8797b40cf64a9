//! In-memory store implementing the booking ports
//!
//! Reservations, blocked days and the listing catalog share one
//! `parking_lot::Mutex`. Every check-and-write runs under that lock, so two
//! overlapping booking attempts can never both be stored as confirmed.

use std::collections::HashMap;

use async_trait::async_trait;
use fleetbook_core::{
    AvailabilityContext, AvailabilityEngine, BlockedDayRepository, CatalogSearch,
    ReservationRepository, SearchCriteria, WriteOutcome,
};
use fleetbook_domain::{
    AvailabilityVerdict, BlockedDaySet, CalendarDay, FleetbookError, Listing, ReservationRecord,
    ReservationStatus, Result as DomainResult,
};
use parking_lot::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    /// All vehicles, insertion order
    reservations: Vec<ReservationRecord>,
    blocked: HashMap<String, BlockedDaySet>,
    listings: Vec<Listing>,
}

impl StoreState {
    fn reservations_for(&self, resource_id: &str) -> Vec<ReservationRecord> {
        self.reservations.iter().filter(|r| r.resource_id == resource_id).cloned().collect()
    }

    fn position(&self, id: Uuid) -> DomainResult<usize> {
        self.reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FleetbookError::NotFound(format!("reservation {id}")))
    }
}

/// Process-local implementation of `ReservationRepository` and
/// `BlockedDayRepository`
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a catalog listing.
    pub fn upsert_listing(&self, listing: Listing) {
        let mut state = self.state.lock();
        match state.listings.iter().position(|l| l.id == listing.id) {
            Some(index) => state.listings[index] = listing,
            None => state.listings.push(listing),
        }
    }

    /// Run a catalog search over the stored listings.
    ///
    /// # Errors
    /// `InvalidInput` when the searched range ends before it starts.
    pub fn search_listings(
        &self,
        search: &CatalogSearch,
        criteria: &SearchCriteria,
    ) -> DomainResult<Vec<Listing>> {
        let state = self.state.lock();
        let mut by_listing: HashMap<String, Vec<ReservationRecord>> = HashMap::new();
        for record in &state.reservations {
            by_listing.entry(record.resource_id.clone()).or_default().push(record.clone());
        }
        let found = search.search(&state.listings, criteria, &by_listing, &state.blocked)?;
        Ok(found.into_iter().cloned().collect())
    }

    /// Number of stored reservations across all vehicles.
    pub fn reservation_count(&self) -> usize {
        self.state.lock().reservations.len()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn reservations_for(&self, resource_id: &str) -> DomainResult<Vec<ReservationRecord>> {
        Ok(self.state.lock().reservations_for(resource_id))
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<ReservationRecord>> {
        Ok(self.state.lock().reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn insert_checked(
        &self,
        record: ReservationRecord,
        today: CalendarDay,
        engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        let mut state = self.state.lock();
        if state.reservations.iter().any(|r| r.id == record.id) {
            return Err(FleetbookError::InvalidInput(format!(
                "reservation {} already exists",
                record.id
            )));
        }

        let empty = BlockedDaySet::new();
        let verdict = {
            let context = AvailabilityContext {
                resource_id: &record.resource_id,
                today,
                reservations: &state.reservations,
                blocked: state.blocked.get(&record.resource_id).unwrap_or(&empty),
            };
            engine.check_interval(record.interval, &context)
        };
        if !verdict.available {
            return Ok(WriteOutcome::Rejected(verdict));
        }

        state.reservations.push(record.clone());
        tracing::debug!(reservation_id = %record.id, "reservation stored");
        Ok(WriteOutcome::Accepted(record))
    }

    async fn transition_status(
        &self,
        id: Uuid,
        next: ReservationStatus,
        engine: &AvailabilityEngine,
    ) -> DomainResult<WriteOutcome> {
        let mut state = self.state.lock();
        let index = state.position(id)?;
        let mut updated = state.reservations[index].clone();
        updated.transition_to(next)?;

        if next == ReservationStatus::Confirmed {
            let conflict = engine.find_conflict(
                &updated.interval,
                &updated.resource_id,
                &state.reservations,
                Some(id),
            );
            if let Some(conflict) = conflict {
                return Ok(WriteOutcome::Rejected(AvailabilityVerdict::already_booked(conflict)));
            }
        }

        state.reservations[index] = updated.clone();
        tracing::debug!(reservation_id = %id, status = %next, "reservation status updated");
        Ok(WriteOutcome::Accepted(updated))
    }
}

#[async_trait]
impl BlockedDayRepository for InMemoryStore {
    async fn blocked_days(&self, resource_id: &str) -> DomainResult<BlockedDaySet> {
        Ok(self.state.lock().blocked.get(resource_id).cloned().unwrap_or_default())
    }

    async fn toggle_blocked_day(&self, resource_id: &str, day: CalendarDay) -> DomainResult<bool> {
        let mut state = self.state.lock();
        Ok(state.blocked.entry(resource_id.to_string()).or_default().toggle(day))
    }
}
