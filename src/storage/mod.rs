//! Storage Module
//!
//! The record store contract consumed by the cache, plus an in-memory
//! implementation of it.
//!
//! Every implementation must behave the same way from the caller's side:
//! - `get_all` fails with `NotFound` when there are no live records
//! - `get_by_id`, `update` and `delete` fail with `NotFound` when no live
//!   record matches the identifier
//! - `insert` assigns the identifier on the record it is given

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Flight, FlightId};

pub use memory::InMemoryFlightStore;

/// Durable CRUD over flight records.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Returns every live record.
    async fn get_all(&self) -> Result<Vec<Flight>>;

    /// Gets a record by its identifier.
    async fn get_by_id(&self, id: FlightId) -> Result<Flight>;

    /// Persists a new record and writes the assigned identifier into `flight`.
    async fn insert(&self, flight: &mut Flight) -> Result<()>;

    /// Replaces an existing record.
    async fn update(&self, flight: &Flight) -> Result<()>;

    /// Deletes a record by its identifier.
    async fn delete(&self, id: FlightId) -> Result<()>;
}
