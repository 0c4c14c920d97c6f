//! Cache Statistics Module
//!
//! The metrics sink the decorator and sweeper report into, and an
//! atomic-counter implementation of it.

use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

// == Metrics Sink ==
/// Receives cache counters and gauges.
///
/// Every method is infallible: a sink must never affect cache behavior.
/// Callers never invoke a sink while holding the cache lock.
pub trait MetricsSink: Send + Sync {
    fn record_hit(&self);
    fn record_miss(&self);
    fn record_insert(&self);
    fn record_update(&self);
    fn record_delete(&self);
    /// Current number of entries in the table
    fn set_size(&self, size: usize);
    /// Entries removed by one sweep
    fn record_expired(&self, count: usize);
    /// Completion time of a sweep
    fn record_sweep(&self, at: DateTime<Utc>);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_hit(&self) {}
    fn record_miss(&self) {}
    fn record_insert(&self) {}
    fn record_update(&self) {}
    fn record_delete(&self) {}
    fn set_size(&self, _size: usize) {}
    fn record_expired(&self, _count: usize) {}
    fn record_sweep(&self, _at: DateTime<Utc>) {}
}

// == Cache Stats ==
/// Tracks cache performance metrics with lock-free counters.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    deletes: AtomicU64,
    expired: AtomicU64,
    size: AtomicUsize,
    /// Unix milliseconds of the last sweep, 0 = never
    last_sweep_ms: AtomicI64,
}

/// Point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub deletes: u64,
    pub expired: u64,
    pub size: usize,
    pub last_sweep: Option<DateTime<Utc>>,
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current snapshot of all metrics.
    pub fn snapshot(&self) -> StatsSnapshot {
        let last_sweep_ms = self.last_sweep_ms.load(Ordering::Relaxed);
        let last_sweep = if last_sweep_ms == 0 {
            None
        } else {
            Utc.timestamp_millis_opt(last_sweep_ms).single()
        };

        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            size: self.size.load(Ordering::Relaxed),
            last_sweep,
        }
    }
}

impl MetricsSink for CacheStats {
    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    fn set_size(&self, size: usize) {
        self.size.store(size, Ordering::Relaxed);
    }

    fn record_expired(&self, count: usize) {
        self.expired.fetch_add(count as u64, Ordering::Relaxed);
    }

    fn record_sweep(&self, at: DateTime<Utc>) {
        self.last_sweep_ms.store(at.timestamp_millis(), Ordering::Relaxed);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let snapshot = CacheStats::new().snapshot();
        assert_eq!(snapshot, StatsSnapshot::default());
        assert!(snapshot.last_sweep.is_none());
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.snapshot().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.snapshot().hit_rate(), 0.75);
    }

    #[test]
    fn test_expired_accumulates_and_size_is_a_gauge() {
        let stats = CacheStats::new();
        stats.record_expired(3);
        stats.record_expired(2);
        stats.set_size(10);
        stats.set_size(4);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.expired, 5);
        assert_eq!(snapshot.size, 4);
    }

    #[test]
    fn test_record_sweep_keeps_millisecond_timestamp() {
        let stats = CacheStats::new();
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        stats.record_sweep(at);
        assert_eq!(stats.snapshot().last_sweep, Some(at));
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = CacheStats::new();
        stats.record_insert();
        stats.record_update();
        stats.record_delete();

        let json = serde_json::to_value(stats.snapshot()).unwrap();
        assert_eq!(json["inserts"], 1);
        assert_eq!(json["updates"], 1);
        assert_eq!(json["deletes"], 1);
        assert!(json["last_sweep"].is_null());
    }
}
