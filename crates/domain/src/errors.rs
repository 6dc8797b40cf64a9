//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Fleetbook
///
/// Business-rule rejections (past dates, blocked days, double bookings) are
/// not errors; they are reported through
/// [`AvailabilityVerdict`](crate::AvailabilityVerdict). This enum covers
/// malformed caller input and infrastructure failures.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FleetbookError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FleetbookError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the system.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_) | Self::InvalidInput(_) | Self::InvalidTransition(_)
        )
    }
}

/// Result type alias for Fleetbook operations
pub type Result<T> = std::result::Result<T, FleetbookError>;
