//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::impl_domain_status_conversions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub search: SearchConfig,
    pub booking: BookingConfig,
    pub logging: LoggingConfig,
}

/// Availability engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IANA zone name (e.g. `Europe/Berlin`) or a fixed offset such as
    /// `+02:00`. `None` uses the process-local zone.
    pub time_zone: Option<String>,
    pub scan_order: ScanOrder,
}

/// Order in which existing reservations are scanned for conflicts.
///
/// Determines which conflicting reservation is reported when several
/// overlap the candidate; the accept/reject outcome is identical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Report the first conflict in the order records were supplied
    #[default]
    Input,
    /// Sort by start day and stop once records start after the candidate
    Chronological,
}

impl_domain_status_conversions!(ScanOrder {
    Input => "input",
    Chronological => "chronological",
});

/// Catalog search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Exclude listings whose owner blocked a day inside the searched range.
    /// Off by default: search only considers confirmed reservations.
    pub honor_blocked_days: bool,
}

/// Booking flow configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Store accepted bookings as confirmed (instant book). When false they
    /// are stored as pending and wait for the host.
    pub auto_confirm: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self { auto_confirm: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
