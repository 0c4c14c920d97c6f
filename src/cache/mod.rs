//! Cache Module
//!
//! In-memory flight caching with TTL expiration, and the cache-aside
//! decorator that puts it in front of a flight store.

mod decorator;
mod entry;
mod stats;
mod table;


// Re-export public types
pub use decorator::CachedFlightStore;
pub use entry::CacheEntry;
pub(crate) use entry::deadline_after;
pub use stats::{CacheStats, MetricsSink, NoopMetrics, StatsSnapshot};
pub use table::CacheTable;
