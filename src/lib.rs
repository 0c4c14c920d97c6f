//! Flight Cache - A cache-aside layer for a flight record store
//!
//! Serves flight reads from a TTL-bounded in-memory table and forces writes
//! through to the backing store, with a background sweep for expired entries.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod tasks;

pub use config::Config;
pub use error::{FlightError, Result};
pub use state::AppState;
pub use tasks::spawn_sweeper;
