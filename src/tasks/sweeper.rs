//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{deadline_after, CacheTable, MetricsSink};

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// Each tick reads the clock once, sweeps the table, then reports the removed
/// count, the remaining size and the sweep time to the metrics sink. The first
/// sweep runs one full interval after the task starts.
///
/// The task stops when `shutdown` turns `true` or its sender is dropped. The
/// signal is only observed between ticks, so a sweep in progress always
/// completes.
///
/// # Arguments
/// * `table` - Cache table shared with the decorator
/// * `metrics` - Sink receiving sweep results
/// * `sweep_interval` - Time between sweeps
/// * `shutdown` - Watch receiver for the stop signal
///
/// # Example
/// ```ignore
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_sweeper(table.clone(), stats.clone(), Duration::from_secs(60), shutdown_rx);
/// // Later, during shutdown:
/// let _ = shutdown_tx.send(true);
/// handle.await?;
/// ```
pub fn spawn_sweeper(
    table: Arc<CacheTable>,
    metrics: Arc<dyn MetricsSink>,
    sweep_interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            interval_secs = sweep_interval.as_secs(),
            "Cache expiry sweeper started"
        );

        let first_sweep = deadline_after(Instant::now(), sweep_interval);
        let mut ticker = interval_at(first_sweep, sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    // A dropped sender counts as shutdown
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    sweep_once(&table, metrics.as_ref());
                }
            }
        }

        info!("Cache expiry sweeper stopped");
    })
}

/// Runs one sweep cycle. Returns the number of entries removed.
fn sweep_once(table: &CacheTable, metrics: &dyn MetricsSink) -> usize {
    let now = Instant::now();
    let removed = table.sweep_expired(now);
    let remaining = table.len();

    metrics.record_expired(removed);
    metrics.set_size(remaining);
    metrics.record_sweep(Utc::now());

    if removed > 0 {
        info!(
            expired_removed = removed,
            remaining, "Cache sweep cycle complete"
        );
    } else {
        debug!(remaining, "Cache sweep cycle complete, nothing expired");
    }
    removed
}
