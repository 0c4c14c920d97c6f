//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::Flight;

// Stand-in for "never" when a deadline doesn't fit in an Instant
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Returns `now + after`, or roughly 30 years from `now` if that overflows.
pub(crate) fn deadline_after(now: Instant, after: Duration) -> Instant {
    now.checked_add(after).unwrap_or_else(|| now + FAR_FUTURE)
}

// == Cache Entry ==
/// A flight snapshot held by the cache table, with its expiry time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached record
    pub flight: Flight,
    /// Instant after which the entry is no longer served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that stays fresh for `ttl` from `now`.
    pub fn new(flight: Flight, ttl: Duration, now: Instant) -> Self {
        Self {
            flight,
            expires_at: deadline_after(now, ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now` reaches
    /// `expires_at`, so the sweep and lazy lookups agree on the same instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Flight {
        Flight::new("A", "B")
    }

    #[test]
    fn test_entry_fresh_before_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new(flight(), Duration::from_secs(10), now);

        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::from_secs(9)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new(flight(), Duration::from_secs(10), now);

        assert!(
            entry.is_expired_at(now + Duration::from_secs(10)),
            "Entry should be expired at boundary"
        );
        assert!(entry.is_expired_at(now + Duration::from_secs(11)));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let now = Instant::now();
        let entry = CacheEntry::new(flight(), Duration::ZERO, now);
        assert!(entry.is_expired_at(now));
    }

    #[test]
    fn test_huge_ttl_saturates_to_far_future() {
        let now = Instant::now();
        let entry = CacheEntry::new(flight(), Duration::MAX, now);

        assert_eq!(entry.expires_at, now + FAR_FUTURE);
        assert!(!entry.is_expired_at(now + Duration::from_secs(86400 * 365)));
    }
}
