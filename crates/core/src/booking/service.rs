//! Booking flow - core business logic

use std::sync::Arc;

use fleetbook_domain::{
    AvailabilityVerdict, BookingConfig, DateInput, FleetbookError, Interval, ReservationRecord,
    ReservationStatus, Result,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ports::{BlockedDayRepository, ReservationRepository, WriteOutcome};
use crate::availability::{AvailabilityContext, AvailabilityEngine};
use crate::clock::Clock;

/// A guest's request to rent a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub resource_id: String,
    pub guest_id: Option<String>,
    pub pickup: DateInput,
    pub return_date: DateInput,
}

/// Booking service
///
/// Runs the advisory availability check for fast feedback, then hands the
/// record to the repository, which re-checks atomically with the write.
pub struct BookingService {
    engine: AvailabilityEngine,
    reservations: Arc<dyn ReservationRepository>,
    blocked_days: Arc<dyn BlockedDayRepository>,
    clock: Arc<dyn Clock>,
    auto_confirm: bool,
}

impl BookingService {
    /// Create a new booking service with instant booking enabled
    pub fn new(
        engine: AvailabilityEngine,
        reservations: Arc<dyn ReservationRepository>,
        blocked_days: Arc<dyn BlockedDayRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { engine, reservations, blocked_days, clock, auto_confirm: true }
    }

    /// Apply booking configuration.
    pub fn with_config(mut self, config: &BookingConfig) -> Self {
        self.auto_confirm = config.auto_confirm;
        self
    }

    pub const fn engine(&self) -> &AvailabilityEngine {
        &self.engine
    }

    /// Advisory availability check for a date picker.
    ///
    /// # Errors
    /// `InvalidDate` for unparseable endpoints, or any repository error.
    pub async fn check_availability(
        &self,
        resource_id: &str,
        pickup: &DateInput,
        return_date: &DateInput,
    ) -> Result<AvailabilityVerdict> {
        let candidate = self.candidate(pickup, return_date)?;
        self.evaluate(resource_id, candidate).await
    }

    /// Create a reservation if the dates are free.
    ///
    /// Business-rule rejections, including losing a race at write time, are
    /// returned as [`WriteOutcome::Rejected`].
    pub async fn request_booking(&self, request: BookingRequest) -> Result<WriteOutcome> {
        let candidate = self.candidate(&request.pickup, &request.return_date)?;
        let verdict = self.evaluate(&request.resource_id, candidate).await?;
        if !verdict.available {
            debug!(
                resource_id = %request.resource_id,
                candidate = %candidate,
                reason = ?verdict.reason,
                "booking request rejected"
            );
            return Ok(WriteOutcome::Rejected(verdict));
        }

        let status = if self.auto_confirm {
            ReservationStatus::Confirmed
        } else {
            ReservationStatus::Pending
        };
        let mut record = ReservationRecord::new(request.resource_id, candidate, status);
        record.guest_id = request.guest_id;

        let today = self.clock.today(self.engine.zone());
        let outcome = self.reservations.insert_checked(record, today, &self.engine).await?;
        match &outcome {
            WriteOutcome::Accepted(stored) => info!(
                reservation_id = %stored.id,
                resource_id = %stored.resource_id,
                interval = %stored.interval,
                status = %stored.status,
                "reservation created"
            ),
            WriteOutcome::Rejected(verdict) => warn!(
                candidate = %candidate,
                reason = ?verdict.reason,
                "reservation rejected at write time"
            ),
        }
        Ok(outcome)
    }

    /// Host accepts a pending reservation.
    pub async fn confirm(&self, id: Uuid) -> Result<WriteOutcome> {
        let outcome = self
            .reservations
            .transition_status(id, ReservationStatus::Confirmed, &self.engine)
            .await?;
        match &outcome {
            WriteOutcome::Accepted(_) => info!(reservation_id = %id, "reservation confirmed"),
            WriteOutcome::Rejected(verdict) => {
                warn!(reservation_id = %id, reason = ?verdict.reason, "confirmation rejected");
            }
        }
        Ok(outcome)
    }

    /// Guest, host or admin cancels a reservation.
    ///
    /// # Errors
    /// `NotFound`, `InvalidTransition` (already cancelled), or `Internal`
    /// if the repository refuses a cancellation on availability grounds.
    pub async fn cancel(&self, id: Uuid) -> Result<ReservationRecord> {
        match self
            .reservations
            .transition_status(id, ReservationStatus::Cancelled, &self.engine)
            .await?
        {
            WriteOutcome::Accepted(record) => {
                info!(reservation_id = %id, "reservation cancelled");
                Ok(record)
            }
            WriteOutcome::Rejected(verdict) => Err(FleetbookError::Internal(format!(
                "cancellation of {id} rejected: {:?}",
                verdict.reason
            ))),
        }
    }

    fn candidate(&self, pickup: &DateInput, return_date: &DateInput) -> Result<Interval> {
        Ok(Interval::new(self.engine.normalize(pickup)?, self.engine.normalize(return_date)?))
    }

    async fn evaluate(
        &self,
        resource_id: &str,
        candidate: Interval,
    ) -> Result<AvailabilityVerdict> {
        let reservations = self.reservations.reservations_for(resource_id).await?;
        let blocked = self.blocked_days.blocked_days(resource_id).await?;
        let context = AvailabilityContext {
            resource_id,
            today: self.clock.today(self.engine.zone()),
            reservations: &reservations,
            blocked: &blocked,
        };
        Ok(self.engine.check_interval(candidate, &context))
    }
}
