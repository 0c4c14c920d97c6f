//! Configuration Module
//!
//! Handles loading the cache timing parameters from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_CACHE_TTL_SECS: u64 = 10;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
// Larger values are clamped to one year
const MAX_DURATION_SECS: u64 = 86400 * 365;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Freshness window of a cache entry in seconds
    pub cache_ttl: u64,
    /// Interval between expiry sweeps in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 10)
    /// - `SWEEP_INTERVAL_SECS` - Expiry sweep frequency in seconds (default: 60)
    ///
    /// Missing, unparsable and zero values fall back to the defaults. Values
    /// above one year are clamped to one year.
    pub fn from_env() -> Self {
        Self {
            cache_ttl: positive_secs("CACHE_TTL_SECS").unwrap_or(DEFAULT_CACHE_TTL_SECS),
            sweep_interval: positive_secs("SWEEP_INTERVAL_SECS")
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval)
    }

    /// Longest time an expired entry can stay in the table before a sweep
    /// removes it.
    pub fn max_staleness(&self) -> Duration {
        self.ttl().saturating_add(self.sweep_interval())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            sweep_interval: DEFAULT_SWEEP_INTERVAL_SECS,
        }
    }
}

fn positive_secs(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| parse_secs(&v))
}

fn parse_secs(value: &str) -> Option<u64> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|secs: &u64| *secs > 0)
        .map(|secs| secs.min(MAX_DURATION_SECS))
}
