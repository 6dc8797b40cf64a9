//! Owner-blocked days

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::calendar::CalendarDay;

/// Days a vehicle owner withheld from booking, independent of reservations.
///
/// Unordered; membership is the only query the engine needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockedDaySet {
    days: HashSet<CalendarDay>,
}

impl BlockedDaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.days.contains(&day)
    }

    /// Flip the blocked state of `day`. Returns `true` if the day is blocked
    /// afterwards.
    pub fn toggle(&mut self, day: CalendarDay) -> bool {
        if self.days.remove(&day) {
            false
        } else {
            self.days.insert(day);
            true
        }
    }

    pub fn insert(&mut self, day: CalendarDay) -> bool {
        self.days.insert(day)
    }

    pub fn remove(&mut self, day: CalendarDay) -> bool {
        self.days.remove(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    /// Blocked days in chronological order, for rendering.
    pub fn sorted(&self) -> Vec<CalendarDay> {
        let mut days: Vec<_> = self.days.iter().copied().collect();
        days.sort_unstable();
        days
    }
}

impl FromIterator<CalendarDay> for BlockedDaySet {
    fn from_iter<I: IntoIterator<Item = CalendarDay>>(iter: I) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

impl Extend<CalendarDay> for BlockedDaySet {
    fn extend<I: IntoIterator<Item = CalendarDay>>(&mut self, iter: I) {
        self.days.extend(iter);
    }
}
