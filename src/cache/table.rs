//! Cache Table Module
//!
//! Thread-safe map from flight id to a time-bounded cache entry.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::cache::CacheEntry;
use crate::models::{Flight, FlightId};

// == Cache Table ==
/// In-memory flight cache with TTL support.
///
/// A single reader/writer lock guards the map: lookups share the read lock,
/// every mutation takes the write lock. No method performs I/O or awaits, so
/// the lock is never held across a store call.
///
/// An entry that is still present but past its expiry is treated as absent by
/// every read path. It stays in the map until the next sweep or overwrite.
#[derive(Debug, Default)]
pub struct CacheTable {
    entries: RwLock<HashMap<FlightId, CacheEntry>>,
}

impl CacheTable {
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns a copy of the cached flight if present and fresh.
    pub fn lookup(&self, id: FlightId) -> Option<Flight> {
        self.lookup_at(id, Instant::now())
    }

    /// Same as [`lookup`](Self::lookup) with an explicit clock reading.
    pub fn lookup_at(&self, id: FlightId, now: Instant) -> Option<Flight> {
        let entries = self.entries.read();
        entries
            .get(&id)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.flight.clone())
    }

    // == Store ==
    /// Inserts or overwrites the entry for `flight.id`, fresh for `ttl`.
    pub fn store(&self, flight: Flight, ttl: Duration) {
        self.store_at(flight, ttl, Instant::now());
    }

    /// Same as [`store`](Self::store) with an explicit clock reading.
    pub fn store_at(&self, flight: Flight, ttl: Duration, now: Instant) {
        let id = flight.id;
        self.entries.write().insert(id, CacheEntry::new(flight, ttl, now));
    }

    // == Insert New ==
    /// Adds the entry only if no fresh entry exists for the id.
    ///
    /// Returns false and leaves the existing entry untouched otherwise. The
    /// check and the insert happen under one write lock.
    pub fn insert_new(&self, flight: Flight, ttl: Duration) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.write();
        if entries
            .get(&flight.id)
            .is_some_and(|entry| !entry.is_expired_at(now))
        {
            return false;
        }
        entries.insert(flight.id, CacheEntry::new(flight, ttl, now));
        true
    }

    // == Replace Existing ==
    /// Overwrites the entry and refreshes its TTL if one is present.
    ///
    /// An expired entry the sweeper has not removed yet still counts as
    /// present. Returns false and changes nothing if the id is absent.
    pub fn replace_existing(&self, flight: Flight, ttl: Duration) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.write();
        match entries.get_mut(&flight.id) {
            Some(entry) => {
                *entry = CacheEntry::new(flight, ttl, now);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes the entry if present. Returns whether anything was removed.
    pub fn remove(&self, id: FlightId) -> bool {
        self.entries.write().remove(&id).is_some()
    }

    // == Sweep Expired ==
    /// Removes every entry whose expiry is at or before `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self, now: Instant) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Length ==
    /// Returns the number of entries held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
