//! Error types for the flight store and its cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::models::FlightId;

// == Flight Error Enum ==
/// Unified error type for store and cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightError {
    /// No live record matches the request
    #[error("Flight not found: {0}")]
    NotFound(String),

    /// Opaque failure reported by the backing store
    #[error("Store error: {0}")]
    Store(String),

    /// Insert committed, but the cache already held a fresh entry for the id
    #[error("Flight {0} already cached after insert")]
    AlreadyCached(FlightId),

    /// Update committed, but the cache held no fresh entry for the id
    #[error("Flight {0} missing from cache on update")]
    StaleCacheOnUpdate(FlightId),
}

impl FlightError {
    /// Returns true for errors raised by the cache after the store write
    /// already committed. Callers may log these but must not treat the
    /// request as failed.
    pub fn is_cache_diagnostic(&self) -> bool {
        matches!(
            self,
            FlightError::AlreadyCached(_) | FlightError::StaleCacheOnUpdate(_)
        )
    }

    /// Returns true if the store reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FlightError::NotFound(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for store and cache operations.
pub type Result<T> = std::result::Result<T, FlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_classification() {
        let id = FlightId::new_random();
        assert!(FlightError::AlreadyCached(id).is_cache_diagnostic());
        assert!(FlightError::StaleCacheOnUpdate(id).is_cache_diagnostic());
        assert!(!FlightError::NotFound(id.to_string()).is_cache_diagnostic());
        assert!(!FlightError::Store("disk full".to_string()).is_cache_diagnostic());
    }

    #[test]
    fn test_error_display() {
        let err = FlightError::Store("connection reset".to_string());
        assert_eq!(err.to_string(), "Store error: connection reset");

        let err = FlightError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "Flight not found: abc");
        assert!(err.is_not_found());
    }
}
