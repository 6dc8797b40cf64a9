//! Host calendar service

use std::sync::Arc;

use fleetbook_domain::{CalendarDay, DateInput, Interval, Result};
use tracing::info;

use super::view::{month_window, render_window, CalendarCell};
use crate::availability::{count_blocked_days, AvailabilityEngine};
use crate::booking::{BlockedDayRepository, ReservationRepository};
use crate::clock::Clock;

/// Calendar operations for the vehicle owner
pub struct HostCalendarService {
    engine: AvailabilityEngine,
    reservations: Arc<dyn ReservationRepository>,
    blocked_days: Arc<dyn BlockedDayRepository>,
    clock: Arc<dyn Clock>,
}

impl HostCalendarService {
    pub fn new(
        engine: AvailabilityEngine,
        reservations: Arc<dyn ReservationRepository>,
        blocked_days: Arc<dyn BlockedDayRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { engine, reservations, blocked_days, clock }
    }

    /// Day states for one month of one vehicle.
    pub async fn month_view(
        &self,
        resource_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarCell>> {
        let window = month_window(year, month)?;
        let reservations = self.reservations.reservations_for(resource_id).await?;
        let blocked = self.blocked_days.blocked_days(resource_id).await?;
        let today = self.clock.today(self.engine.zone());
        Ok(render_window(&window, today, &reservations, &blocked))
    }

    /// Block or unblock one day. Returns `true` if the day is now blocked.
    pub async fn toggle_day(&self, resource_id: &str, day: &DateInput) -> Result<bool> {
        let day = self.engine.normalize(day)?;
        let blocked = self.blocked_days.toggle_blocked_day(resource_id, day).await?;
        info!(resource_id = %resource_id, day = %day, blocked, "owner toggled day");
        Ok(blocked)
    }

    /// How many days of a prospective range are blocked.
    pub async fn blocked_day_count(
        &self,
        resource_id: &str,
        start: CalendarDay,
        end: CalendarDay,
    ) -> Result<usize> {
        let blocked = self.blocked_days.blocked_days(resource_id).await?;
        Ok(count_blocked_days(&Interval::new(start, end), &blocked))
    }
}
