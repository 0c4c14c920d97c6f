//! Record types for the flight store
//!
//! Plain value types shared by the store, the cache table and the decorator.

pub mod flight;

// Re-export commonly used types
pub use flight::{Flight, FlightId};
