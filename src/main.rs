//! Flight Cache - A cache-aside layer for a flight record store
//!
//! Hosts the cached store and its expiry sweeper for the lifetime of the
//! process.

use anyhow::Context;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flight_cache::{AppState, Config};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Compose store, cache table and decorator
/// 4. Start the background expiry sweeper
/// 5. Wait for SIGINT/SIGTERM, then stop and join the sweeper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flight Cache");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, sweep_interval={}s, max_staleness={}s",
        config.cache_ttl,
        config.sweep_interval,
        config.max_staleness().as_secs()
    );

    let state = AppState::from_config(&config);
    info!("Cache-aside store initialized");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = state.start_sweeper(shutdown_rx);

    shutdown_signal().await?;

    // Observed between ticks; a sweep in progress finishes first
    let _ = shutdown_tx.send(true);
    sweeper.await.context("expiry sweeper panicked")?;

    let snapshot = state.stats.snapshot();
    info!(
        hits = snapshot.hits,
        misses = snapshot.misses,
        expired = snapshot.expired,
        size = snapshot.size,
        hit_rate = snapshot.hit_rate(),
        "Shutdown complete"
    );
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() -> anyhow::Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("failed to listen for Ctrl+C") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<(), anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<anyhow::Result<()>>();

    tokio::select! {
        result = ctrl_c => {
            result?;
            info!("Received Ctrl+C, initiating shutdown...");
        }
        result = terminate => {
            result?;
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
    Ok(())
}
