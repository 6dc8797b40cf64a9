use std::sync::Arc;

use chrono::{TimeZone, Utc};
use fleetbook_core::MockClock;
use fleetbook_domain::{CalendarDay, Config, DateInput, Listing};
use fleetbook_infra::AppContext;

/// Context pinned to noon UTC of `today`.
pub fn context_on(today: &str, mut config: Config) -> AppContext {
    config.engine.time_zone = Some("UTC".to_string());
    let clock = Arc::new(MockClock::at_noon(day(today)));
    AppContext::with_clock(config, clock).expect("context should build")
}

pub fn day(s: &str) -> CalendarDay {
    s.parse().expect("valid test day")
}

pub fn date(s: &str) -> DateInput {
    DateInput::from(s)
}

pub fn listing(id: &str, city: &str, daily_rate_cents: u64, created_day: u32) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("{id} compact"),
        city: city.to_string(),
        daily_rate_cents,
        created_at: Utc
            .with_ymd_and_hms(2025, 3, created_day, 8, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}
