//! Background Tasks Module
//!
//! Contains background tasks that run periodically during process lifetime.
//!
//! # Tasks
//! - Expiry sweep: Removes expired cache entries at the configured interval

mod sweeper;

pub use sweeper::spawn_sweeper;
