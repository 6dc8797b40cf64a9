//! Date normalization boundary
//!
//! Every date that reaches the engine passes through [`normalize`] first.
//! Instants are converted into the configured [`DayZone`] and truncated to
//! the day; date-only and naive date-time strings are taken as wall-clock
//! values already in that zone.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use fleetbook_domain::constants::{DAY_FORMAT, NAIVE_DATETIME_FORMATS};
use fleetbook_domain::{CalendarDay, DateInput, FleetbookError, Result};

/// Zone in which instants are truncated to calendar days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayZone {
    /// The zone of the running process
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

impl DayZone {
    /// Parse `local`, `utc`, a fixed offset (`+02:00`, `-0530`) or an IANA
    /// zone name (`Europe/Berlin`).
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::Utc),
            _ => {}
        }

        if let Some(offset) = parse_offset(trimmed) {
            return Ok(Self::Fixed(offset));
        }

        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| FleetbookError::Config(format!("Unknown time zone: {spec}")))
    }

    /// Calendar day of `instant` in this zone.
    pub fn day_of(&self, instant: DateTime<Utc>) -> CalendarDay {
        let date = match self {
            Self::Local => instant.with_timezone(&chrono::Local).date_naive(),
            Self::Utc => instant.date_naive(),
            Self::Fixed(offset) => instant.with_timezone(offset).date_naive(),
            Self::Named(tz) => instant.with_timezone(tz).date_naive(),
        };
        CalendarDay::from_naive(date)
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

fn parse_offset(spec: &str) -> Option<FixedOffset> {
    let (sign, rest) = match spec.as_bytes().first()? {
        b'+' => (1, &spec[1..]),
        b'-' => (-1, &spec[1..]),
        _ => return None,
    };
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some(parts) => parts,
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Convert any supported date input into a [`CalendarDay`] in `zone`.
///
/// # Errors
/// Returns [`FleetbookError::InvalidDate`] when the input does not denote a
/// real calendar date.
pub fn normalize(input: &DateInput, zone: &DayZone) -> Result<CalendarDay> {
    match input {
        DateInput::Text(text) => parse_text(text, zone),
        DateInput::DocumentTimestamp { seconds, nanoseconds } => {
            DateTime::from_timestamp(*seconds, *nanoseconds).map(|i| zone.day_of(i)).ok_or_else(
                || {
                    FleetbookError::InvalidDate(format!(
                        "timestamp out of range: {seconds}s {nanoseconds}ns"
                    ))
                },
            )
        }
        DateInput::UnixMillis(ms) => DateTime::from_timestamp_millis(*ms)
            .map(|i| zone.day_of(i))
            .ok_or_else(|| FleetbookError::InvalidDate(format!("timestamp out of range: {ms}ms"))),
        DateInput::Instant(instant) => Ok(zone.day_of(*instant)),
        DateInput::Date(date) => Ok(CalendarDay::from_naive(*date)),
        DateInput::Parts { year, month, day } => CalendarDay::from_ymd(*year, *month, *day),
    }
}

fn parse_text(text: &str, zone: &DayZone) -> Result<CalendarDay> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FleetbookError::InvalidDate("empty date".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DAY_FORMAT) {
        return Ok(CalendarDay::from_naive(date));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zone.day_of(instant.with_timezone(&Utc)));
    }

    // Browser `Date#toUTCString` output
    if let Ok(instant) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(zone.day_of(instant.with_timezone(&Utc)));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|wall| CalendarDay::from_naive(wall.date()))
        .ok_or_else(|| FleetbookError::InvalidDate(format!("unrecognized date: {text}")))
}
