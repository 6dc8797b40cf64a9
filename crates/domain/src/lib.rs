//! # Fleetbook Domain
//!
//! Business domain types for the Fleetbook booking engine.
//!
//! This crate contains:
//! - Calendar days, inclusive intervals and loosely-typed date inputs
//! - Reservation records, owner-blocked days and availability verdicts
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Fleetbook crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
