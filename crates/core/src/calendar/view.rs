//! Host calendar day states

use fleetbook_domain::{
    impl_domain_status_conversions, BlockedDaySet, CalendarDay, FleetbookError, Interval,
    ReservationRecord, ReservationStatus, Result,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::availability::is_blocked;

/// How a single day is drawn on the host calendar.
///
/// Precedence when several apply: blocked, booked, pending, cancelled,
/// past, available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    Available,
    Past,
    Blocked,
    Booked,
    Pending,
    Cancelled,
}

impl_domain_status_conversions!(DayState {
    Available => "available",
    Past => "past",
    Blocked => "blocked",
    Booked => "booked",
    Pending => "pending",
    Cancelled => "cancelled",
});

/// One rendered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: CalendarDay,
    pub state: DayState,
    /// Reservation responsible for a booked, pending or cancelled state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<Uuid>,
}

/// State of `day` for the vehicle whose records and blocked days are given.
///
/// `reservations` must already be limited to one vehicle.
pub fn day_state(
    day: CalendarDay,
    today: CalendarDay,
    reservations: &[ReservationRecord],
    blocked: &BlockedDaySet,
) -> CalendarCell {
    if is_blocked(day, blocked) {
        return CalendarCell { day, state: DayState::Blocked, reservation_id: None };
    }

    let covering = |status: ReservationStatus| {
        reservations.iter().find(|r| r.status == status && r.interval.contains(day)).map(|r| r.id)
    };

    for (status, state) in [
        (ReservationStatus::Confirmed, DayState::Booked),
        (ReservationStatus::Pending, DayState::Pending),
        (ReservationStatus::Cancelled, DayState::Cancelled),
    ] {
        if let Some(id) = covering(status) {
            return CalendarCell { day, state, reservation_id: Some(id) };
        }
    }

    let state = if day < today { DayState::Past } else { DayState::Available };
    CalendarCell { day, state, reservation_id: None }
}

/// Render every day of `window` in order.
pub fn render_window(
    window: &Interval,
    today: CalendarDay,
    reservations: &[ReservationRecord],
    blocked: &BlockedDaySet,
) -> Vec<CalendarCell> {
    window.days().map(|day| day_state(day, today, reservations, blocked)).collect()
}

/// First through last day of a month.
///
/// # Errors
/// `InvalidDate` for a month outside 1..=12 or an unrepresentable year.
pub fn month_window(year: i32, month: u32) -> Result<Interval> {
    let first = CalendarDay::from_ymd(year, month, 1)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next_first = CalendarDay::from_ymd(next_year, next_month, 1)?;
    let last = next_first
        .as_naive()
        .pred_opt()
        .map(CalendarDay::from_naive)
        .ok_or_else(|| FleetbookError::InvalidDate(format!("{year:04}-{month:02}")))?;
    Ok(Interval::new(first, last))
}
