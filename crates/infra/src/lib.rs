//! # Fleetbook Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (files and environment)
//! - Logging setup
//! - The in-memory reservation and blocked-day store
//! - The application context that wires services together
//!
//! ## Architecture
//! - Implements traits defined in `fleetbook-core`
//! - Depends on `fleetbook-domain` and `fleetbook-core`
//! - Contains all "impure" code (environment, files, global subscriber)

pub mod config;
pub mod context;
pub mod observability;
pub mod store;

// Re-export commonly used items
pub use context::AppContext;
pub use observability::init_tracing;
pub use store::InMemoryStore;
