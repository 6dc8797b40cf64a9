//! Calendar day and inclusive day interval types

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::DAY_FORMAT;
use crate::errors::{FleetbookError, Result};

/// A single calendar day with no time-of-day and no zone.
///
/// Equality and ordering only look at year, month and day. Serialized as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Build a day from its components, rejecting impossible dates such as
    /// month 13 or February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self).ok_or_else(|| {
            FleetbookError::InvalidDate(format!("{year:04}-{month:02}-{day:02}"))
        })
    }

    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following day, or `None` at the end of the representable range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

/// Strict `YYYY-MM-DD` parsing. Looser inputs (timestamps, date-times) go
/// through the engine's normalization boundary instead.
impl FromStr for CalendarDay {
    type Err = FleetbookError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
            .map(Self)
            .map_err(|e| FleetbookError::InvalidDate(format!("{s}: {e}")))
    }
}

/// An inclusive span of days: both `start` and `end` are occupied.
///
/// The type does not require `end >= start`. Callers that accept bookings
/// must reject reversed and zero-length intervals themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Interval {
    pub start: CalendarDay,
    pub end: CalendarDay,
}

impl Interval {
    pub const fn new(start: CalendarDay, end: CalendarDay) -> Self {
        Self { start, end }
    }

    /// Interval covering exactly one day.
    pub const fn single(day: CalendarDay) -> Self {
        Self { start: day, end: day }
    }

    /// Number of nights between pickup and return. Negative when reversed.
    pub fn nights(&self) -> i64 {
        self.start.days_until(self.end)
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }

    /// Iterate every day from `start` to `end` inclusive, in order. Yields
    /// nothing when the interval is reversed.
    pub fn days(&self) -> DayIter {
        DayIter { next: (self.start <= self.end).then_some(self.start), end: self.end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Iterator over the days of an [`Interval`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<CalendarDay>,
    end: CalendarDay,
}

impl Iterator for DayIter {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end { current.succ() } else { None };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_ymd_rejects_impossible_dates() {
        assert!(CalendarDay::from_ymd(2025, 13, 1).is_err());
        assert!(CalendarDay::from_ymd(2025, 2, 30).is_err());
        assert!(CalendarDay::from_ymd(2024, 2, 29).is_ok());

        let err = CalendarDay::from_ymd(2025, 13, 1).unwrap_err();
        assert_eq!(err, FleetbookError::InvalidDate("2025-13-01".to_string()));
    }

    #[test]
    fn test_display_and_parse_agree() {
        let d = CalendarDay::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(d.to_string(), "2025-06-01");
        assert_eq!(day("2025-06-01"), d);
        assert!("2025/06/01".parse::<CalendarDay>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let d = day("2025-08-20");
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""2025-08-20""#);
        let back: CalendarDay = serde_json::from_str(r#""2025-08-20""#).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_days_crosses_month_and_year_boundaries() {
        let interval = Interval::new(day("2024-12-30"), day("2025-01-02"));
        let days: Vec<String> = interval.days().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]);
        assert_eq!(interval.nights(), 3);
    }

    #[test]
    fn test_days_of_single_and_reversed_intervals() {
        let single = Interval::single(day("2025-03-01"));
        assert_eq!(single.days().count(), 1);
        assert_eq!(single.nights(), 0);

        let reversed = Interval::new(day("2025-03-05"), day("2025-03-01"));
        assert_eq!(reversed.days().count(), 0);
        assert_eq!(reversed.nights(), -4);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(day("2025-01-01"), day("2025-01-05"));
        assert!(interval.contains(day("2025-01-01")));
        assert!(interval.contains(day("2025-01-05")));
        assert!(!interval.contains(day("2025-01-06")));
        assert!(!interval.contains(day("2024-12-31")));
    }
}
