//! Application State
//!
//! Composes the flight store, the cache table and the metrics sink at startup.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheTable, CachedFlightStore};
use crate::config::Config;
use crate::storage::{FlightStore, InMemoryFlightStore};
use crate::tasks::spawn_sweeper;

/// Application state shared by everything that reads or writes flights.
///
/// Callers only see `flights`, the cache-aside decorator behind the store
/// trait. The table and stats are kept here so the sweeper and shutdown path
/// can reach them.
#[derive(Clone)]
pub struct AppState {
    /// Caller-facing store, cached
    pub flights: Arc<dyn FlightStore>,
    /// Cache table shared by the decorator and the sweeper
    pub cache: Arc<CacheTable>,
    /// Cache metrics
    pub stats: Arc<CacheStats>,
    sweep_interval: Duration,
}

impl AppState {
    /// Wraps `store` with a fresh cache table using the given timings.
    pub fn with_store<S>(store: Arc<S>, ttl: Duration, sweep_interval: Duration) -> Self
    where
        S: FlightStore + 'static,
    {
        let cache = Arc::new(CacheTable::new());
        let stats = Arc::new(CacheStats::new());
        let flights = CachedFlightStore::new(store, cache.clone(), stats.clone(), ttl);

        Self {
            flights: Arc::new(flights),
            cache,
            stats,
            sweep_interval,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Backs the cache with an in-memory store.
    pub fn from_config(config: &Config) -> Self {
        Self::with_store(
            Arc::new(InMemoryFlightStore::new()),
            config.ttl(),
            config.sweep_interval(),
        )
    }

    /// Starts the expiry sweeper for this state's cache table.
    ///
    /// Must be called from within a Tokio runtime. The returned handle
    /// completes once `shutdown` turns `true`.
    pub fn start_sweeper(&self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        spawn_sweeper(
            self.cache.clone(),
            self.stats.clone(),
            self.sweep_interval,
            shutdown,
        )
    }
}
