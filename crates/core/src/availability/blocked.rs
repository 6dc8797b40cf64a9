//! Owner-blocked day lookups

use fleetbook_domain::{BlockedDaySet, CalendarDay, Interval};

/// Whether `day` was withheld by the owner.
pub fn is_blocked(day: CalendarDay, blocked: &BlockedDaySet) -> bool {
    blocked.contains(day)
}

/// First blocked day of `candidate` in chronological order.
///
/// Walks the span day by day, so the cost depends on the span length and
/// not on how many days are blocked.
pub fn first_blocked_day(candidate: &Interval, blocked: &BlockedDaySet) -> Option<CalendarDay> {
    if blocked.is_empty() {
        return None;
    }
    candidate.days().find(|day| is_blocked(*day, blocked))
}

/// Number of blocked days inside `candidate`, shown next to the date picker.
pub fn count_blocked_days(candidate: &Interval, blocked: &BlockedDaySet) -> usize {
    if blocked.is_empty() {
        return 0;
    }
    candidate.days().filter(|day| is_blocked(*day, blocked)).count()
}
