//! Cache-aside flight store decorator.
//!
//! Wraps a `FlightStore` implementation with the cache table:
//! - **Reads**: check the table first, on miss fetch from the store and populate
//! - **Writes**: persist to the store first, then bring the table in line
//!
//! The store is the authority for every write outcome. Cache inconsistencies
//! noticed after a committed write surface as diagnostic errors (see
//! [`FlightError::is_cache_diagnostic`]) and never roll the write back.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheTable, MetricsSink};
use crate::error::{FlightError, Result};
use crate::models::{Flight, FlightId};
use crate::storage::FlightStore;

/// Cache-aside decorator over a flight store.
///
/// # Type Parameters
///
/// * `S` - The underlying store implementation
pub struct CachedFlightStore<S>
where
    S: FlightStore,
{
    store: Arc<S>,
    table: Arc<CacheTable>,
    metrics: Arc<dyn MetricsSink>,
    ttl: Duration,
}

impl<S> CachedFlightStore<S>
where
    S: FlightStore,
{
    /// Creates a new cached store.
    ///
    /// # Arguments
    ///
    /// * `store` - The store to wrap
    /// * `table` - Cache table, shared with the expiry sweeper
    /// * `metrics` - Sink for hit/miss/size counters
    /// * `ttl` - Freshness window for cached flights
    pub fn new(
        store: Arc<S>,
        table: Arc<CacheTable>,
        metrics: Arc<dyn MetricsSink>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            table,
            metrics,
            ttl,
        }
    }

    fn report_size(&self) {
        let size = self.table.len();
        self.metrics.set_size(size);
    }
}

#[async_trait]
impl<S> FlightStore for CachedFlightStore<S>
where
    S: FlightStore + 'static,
{
    async fn get_all(&self) -> Result<Vec<Flight>> {
        // The table is keyed by id and never authoritative for the full set
        self.store.get_all().await
    }

    async fn get_by_id(&self, id: FlightId) -> Result<Flight> {
        if let Some(flight) = self.table.lookup(id) {
            tracing::trace!(flight_id = %id, "Cache hit for flight");
            self.metrics.record_hit();
            return Ok(flight);
        }

        tracing::trace!(flight_id = %id, "Cache miss for flight");
        self.metrics.record_miss();

        let flight = self.store.get_by_id(id).await?;
        self.table.store(flight.clone(), self.ttl);
        self.report_size();
        Ok(flight)
    }

    async fn insert(&self, flight: &mut Flight) -> Result<()> {
        // 1. Persist; the store assigns the id
        self.store.insert(flight).await?;

        // 2. Populate the table
        if !self.table.insert_new(flight.clone(), self.ttl) {
            tracing::warn!(flight_id = %flight.id, "Inserted flight was already cached");
            return Err(FlightError::AlreadyCached(flight.id));
        }

        self.metrics.record_insert();
        self.report_size();
        tracing::debug!(flight_id = %flight.id, "Flight inserted");
        Ok(())
    }

    async fn update(&self, flight: &Flight) -> Result<()> {
        // 1. Persist; NotFound leaves the table untouched
        self.store.update(flight).await?;

        // 2. Refresh the cached copy
        if !self.table.replace_existing(flight.clone(), self.ttl) {
            tracing::warn!(flight_id = %flight.id, "Updated flight was not cached");
            return Err(FlightError::StaleCacheOnUpdate(flight.id));
        }

        self.metrics.record_update();
        tracing::debug!(flight_id = %flight.id, "Flight updated");
        Ok(())
    }

    async fn delete(&self, id: FlightId) -> Result<()> {
        // 1. Persist the deletion
        self.store.delete(id).await?;

        // 2. Invalidate regardless of whether the flight was cached
        self.table.remove(id);

        self.metrics.record_delete();
        self.report_size();
        tracing::debug!(flight_id = %id, "Flight deleted");
        Ok(())
    }
}
