//! Catalog listing types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// A vehicle offered for rent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub city: String,
    pub daily_rate_cents: u64,
    pub created_at: DateTime<Utc>,
}
