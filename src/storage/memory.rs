//! In-memory flight store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::{FlightError, Result};
use crate::models::{Flight, FlightId};

use super::FlightStore;

#[derive(Debug, Clone)]
struct StoredFlight {
    flight: Flight,
    /// Insertion sequence, keeps `get_all` ordering stable
    seq: u64,
    deleted_at: Option<DateTime<Utc>>,
}

impl StoredFlight {
    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<FlightId, StoredFlight>,
    next_seq: u64,
}

/// Store backend that keeps records in process memory.
///
/// Deletes are soft: the row keeps a `deleted_at` timestamp and is invisible
/// to every operation afterwards. Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryFlightStore {
    inner: RwLock<Inner>,
}

impl InMemoryFlightStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records.
    pub async fn live_count(&self) -> usize {
        self.inner
            .read()
            .await
            .rows
            .values()
            .filter(|row| row.is_live())
            .count()
    }
}

fn not_found(id: FlightId) -> FlightError {
    FlightError::NotFound(id.to_string())
}

#[async_trait]
impl FlightStore for InMemoryFlightStore {
    async fn get_all(&self) -> Result<Vec<Flight>> {
        let inner = self.inner.read().await;
        let mut live: Vec<&StoredFlight> = inner.rows.values().filter(|r| r.is_live()).collect();
        if live.is_empty() {
            return Err(FlightError::NotFound("no flights".to_string()));
        }
        live.sort_by_key(|row| row.seq);
        Ok(live.into_iter().map(|row| row.flight.clone()).collect())
    }

    async fn get_by_id(&self, id: FlightId) -> Result<Flight> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .filter(|row| row.is_live())
            .map(|row| row.flight.clone())
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, flight: &mut Flight) -> Result<()> {
        let mut inner = self.inner.write().await;

        let id = FlightId::new_random();
        if inner.rows.contains_key(&id) {
            return Err(FlightError::Store(format!("identifier collision: {}", id)));
        }
        flight.id = id;

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.rows.insert(
            id,
            StoredFlight {
                flight: flight.clone(),
                seq,
                deleted_at: None,
            },
        );
        Ok(())
    }

    async fn update(&self, flight: &Flight) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&flight.id) {
            Some(row) if row.is_live() => {
                row.flight = flight.clone();
                Ok(())
            }
            _ => Err(not_found(flight.id)),
        }
    }

    async fn delete(&self, id: FlightId) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&id) {
            Some(row) if row.is_live() => {
                row.deleted_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(not_found(id)),
        }
    }
}
