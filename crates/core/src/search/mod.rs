//! Catalog search
//!
//! Filters listings by free dates, city and price, then sorts them. The
//! date filter only looks at confirmed reservations unless
//! `search.honor_blocked_days` is enabled; booking-time checks always
//! consider blocked days.

use std::collections::HashMap;

use fleetbook_domain::{
    impl_domain_status_conversions, BlockedDaySet, FleetbookError, Interval, Listing,
    ReservationRecord, Result, SearchConfig,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::{conflicts, first_blocked_day};

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    Newest,
}

impl_domain_status_conversions!(SortOrder {
    PriceAsc => "price_asc",
    PriceDesc => "price_desc",
    Newest => "newest",
});

/// What the guest typed into the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub range: Option<Interval>,
    pub city: Option<String>,
    pub max_daily_rate_cents: Option<u64>,
    /// `None` keeps catalog order
    pub sort: Option<SortOrder>,
}

/// Listing filter over in-memory catalog data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSearch {
    honor_blocked_days: bool,
}

impl CatalogSearch {
    pub const fn new(config: &SearchConfig) -> Self {
        Self { honor_blocked_days: config.honor_blocked_days }
    }

    /// Whether `range` is free for one listing.
    pub fn is_free(
        &self,
        listing_id: &str,
        range: &Interval,
        reservations: &[ReservationRecord],
        blocked: Option<&BlockedDaySet>,
    ) -> bool {
        let booked = reservations.iter().any(|r| {
            r.is_confirmed() && r.resource_id == listing_id && conflicts(range, &r.interval)
        });
        if booked {
            return false;
        }
        match (self.honor_blocked_days, blocked) {
            (true, Some(days)) => first_blocked_day(range, days).is_none(),
            _ => true,
        }
    }

    /// Apply `criteria` to `listings`.
    ///
    /// `reservations` and `blocked` are keyed by listing id; missing keys
    /// mean no reservations or no blocked days.
    ///
    /// # Errors
    /// `InvalidInput` when the searched range ends before it starts.
    pub fn search<'a>(
        &self,
        listings: &'a [Listing],
        criteria: &SearchCriteria,
        reservations: &HashMap<String, Vec<ReservationRecord>>,
        blocked: &HashMap<String, BlockedDaySet>,
    ) -> Result<Vec<&'a Listing>> {
        if let Some(range) = &criteria.range {
            if range.end < range.start {
                return Err(FleetbookError::InvalidInput(format!(
                    "search range ends before it starts: {range}"
                )));
            }
        }

        let city = criteria.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let mut matches: Vec<&Listing> = listings
            .iter()
            .filter(|listing| city.map_or(true, |c| listing.city.trim().eq_ignore_ascii_case(c)))
            .filter(|listing| {
                criteria.max_daily_rate_cents.map_or(true, |max| listing.daily_rate_cents <= max)
            })
            .filter(|listing| {
                criteria.range.as_ref().map_or(true, |range| {
                    let booked =
                        reservations.get(&listing.id).map(Vec::as_slice).unwrap_or_default();
                    self.is_free(&listing.id, range, booked, blocked.get(&listing.id))
                })
            })
            .collect();

        match criteria.sort {
            Some(SortOrder::PriceAsc) => matches.sort_by_key(|l| l.daily_rate_cents),
            Some(SortOrder::PriceDesc) => {
                matches.sort_by(|a, b| b.daily_rate_cents.cmp(&a.daily_rate_cents));
            }
            Some(SortOrder::Newest) => matches.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            None => {}
        }

        debug!(total = listings.len(), matched = matches.len(), "catalog search");
        Ok(matches)
    }
}
