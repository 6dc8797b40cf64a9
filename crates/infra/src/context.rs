//! Application context - dependency injection container

use std::sync::Arc;

use fleetbook_core::{
    AvailabilityEngine, BookingService, CatalogSearch, Clock, HostCalendarService,
    SearchCriteria, SystemClock,
};
use fleetbook_domain::{Config, Listing, Result};

use crate::store::InMemoryStore;

/// Application context - holds all services and their shared store
pub struct AppContext {
    pub config: Config,
    pub store: Arc<InMemoryStore>,
    pub booking: BookingService,
    pub calendar: HostCalendarService,
    pub search: CatalogSearch,
}

impl AppContext {
    /// Wire services from `config` using the system clock.
    ///
    /// # Errors
    /// Returns `FleetbookError::Config` for an unknown time zone.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Wire services from `config` with an explicit clock.
    ///
    /// # Errors
    /// Returns `FleetbookError::Config` for an unknown time zone.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let engine = AvailabilityEngine::from_config(&config.engine)?;
        let store = Arc::new(InMemoryStore::new());

        let booking =
            BookingService::new(engine, store.clone(), store.clone(), Arc::clone(&clock))
                .with_config(&config.booking);
        let calendar = HostCalendarService::new(engine, store.clone(), store.clone(), clock);
        let search = CatalogSearch::new(&config.search);

        tracing::info!(
            zone = %engine.zone(),
            scan_order = %engine.scan_order(),
            auto_confirm = config.booking.auto_confirm,
            honor_blocked_days = config.search.honor_blocked_days,
            "application context ready"
        );

        Ok(Self { config, store, booking, calendar, search })
    }

    /// Catalog search over the store's listings with the configured policy.
    ///
    /// # Errors
    /// `InvalidInput` when the searched range ends before it starts.
    pub fn search_listings(&self, criteria: &SearchCriteria) -> Result<Vec<Listing>> {
        self.store.search_listings(&self.search, criteria)
    }
}
