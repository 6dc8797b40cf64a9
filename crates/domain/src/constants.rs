//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Calendar formats
pub const DAY_FORMAT: &str = "%Y-%m-%d";
pub const NAIVE_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

// Booking rules
pub const MIN_STAY_NIGHTS: i64 = 1;

// Configuration
pub const ENV_PREFIX: &str = "FLEETBOOK_";
pub const DEFAULT_LOG_LEVEL: &str = "info";
