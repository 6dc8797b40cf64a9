//! Loosely-typed date values accepted at the normalization boundary
//!
//! Booking forms send ISO strings, the document store hands back
//! `{seconds, nanoseconds}` timestamps, and browser code passes epoch
//! milliseconds. All of them are funnelled through [`DateInput`] and turned
//! into a [`CalendarDay`](super::CalendarDay) before any comparison runs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::CalendarDay;

/// Any date-like value the engine knows how to normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// `YYYY-MM-DD`, RFC 3339, or a naive `YYYY-MM-DDTHH:MM[:SS]` string
    Text(String),
    /// Document-store timestamp
    DocumentTimestamp { seconds: i64, nanoseconds: u32 },
    /// Milliseconds since the Unix epoch
    UnixMillis(i64),
    /// An absolute instant
    Instant(DateTime<Utc>),
    /// A date that is already time-free
    Date(NaiveDate),
    /// Separate components, possibly out of range
    Parts { year: i32, month: u32, day: u32 },
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<CalendarDay> for DateInput {
    fn from(value: CalendarDay) -> Self {
        Self::Date(value.as_naive())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

/// Wire representation of a date as it arrives in JSON payloads.
///
/// Accepts a string, an integer of epoch milliseconds, or a timestamp
/// object. The admin SDK's underscored field names are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds", alias = "nanos")]
        nanoseconds: u32,
    },
    Millis(i64),
    Text(String),
}

impl From<RawDate> for DateInput {
    fn from(value: RawDate) -> Self {
        match value {
            RawDate::Timestamp { seconds, nanoseconds } => {
                Self::DocumentTimestamp { seconds, nanoseconds }
            }
            RawDate::Millis(ms) => Self::UnixMillis(ms),
            RawDate::Text(text) => Self::Text(text),
        }
    }
}
