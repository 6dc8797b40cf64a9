//! Inclusive interval overlap

use fleetbook_domain::Interval;

/// Whether two inclusive day intervals share at least one day.
///
/// A reservation occupies its start day and its end day, so intervals that
/// merely touch (`a.end == b.start`) conflict. Symmetric; every interval
/// conflicts with itself. Reversed intervals are not rejected here.
pub fn conflicts(a: &Interval, b: &Interval) -> bool {
    a.start <= b.end && b.start <= a.end
}
