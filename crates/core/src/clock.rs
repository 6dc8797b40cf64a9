//! Injected wall clock
//!
//! Services never read the system time directly; they ask a [`Clock`] for
//! "today" so that availability decisions stay deterministic under test.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use fleetbook_domain::CalendarDay;

use crate::availability::DayZone;

/// Source of the current time
pub trait Clock: Send + Sync + 'static {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in `zone`
    fn today(&self, zone: &DayZone) -> CalendarDay {
        zone.day_of(self.now())
    }
}

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Clock> Clock for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Settable clock for tests
///
/// Clones share the same current time.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    /// Clock fixed at noon UTC of `day`.
    pub fn at_noon(day: CalendarDay) -> Self {
        let noon = day.as_naive().and_hms_opt(12, 0, 0).map(|dt| dt.and_utc());
        Self::new(noon.unwrap_or_else(Utc::now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    pub fn advance_days(&self, days: i64) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += Duration::days(days);
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }
}
