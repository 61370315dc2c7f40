//! Refresh runner entry point for the Lifemap event map.
//!
//! The runner wires the whole system together: it bootstraps an anonymous
//! session with the document store, fetches the initial event list, builds
//! the map view with its injected hints, spawns the view API server, and
//! then keeps the event list fresh on a fixed interval.
//!
//! # Architecture
//!
//! ```text
//! Document store --> fetch loop --> MapView (groups + selection) --> view API --> map frontend
//! ```
//!
//! A fetch failure never takes the view down: the previous delivery keeps
//! being served and the next interval retries.

mod config;
mod error;
mod refresh;

use std::sync::Arc;

use lifemap_core::MapView;
use lifemap_data::{StoreClient, StoreConfig};
use lifemap_observer::{AppState, ServerConfig, spawn_observer};
use lifemap_types::{MarkerAnimation, PixelOffset};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::RunnerConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// performs the store bootstrap and initial fetch, then serves the view
/// API while the refresh loop runs.
///
/// # Errors
///
/// Returns an error if initialization fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("lifemap-runner starting");

    // Load configuration from environment
    let config = RunnerConfig::from_env()?;
    info!(
        store_url = config.store_url,
        collection = config.collection,
        observer_port = config.observer_port,
        refresh_interval_secs = config.refresh_interval.map(|i| i.as_secs()),
        "configuration loaded"
    );

    // Connect to the document store
    let client = StoreClient::new(StoreConfig {
        base_url: config.store_url.clone(),
        collection: config.collection.clone(),
        api_key: config.api_key.clone(),
        timeout: config.http_timeout,
    })?;
    let session = client.sign_in_anonymously().await?;

    // Build the view with its injected map hints
    let view = MapView::new(
        MarkerAnimation::Drop,
        PixelOffset::ABOVE_MARKER,
        config.camera,
    );
    let state = Arc::new(AppState::new(view));

    // Initial delivery. A failure here is logged, not fatal: the view
    // starts empty and the refresh loop retries.
    match client.fetch_events(&session).await {
        Ok(delivery) => {
            let notice = state
                .apply_delivery(&delivery.events, delivery.fetched_at, delivery.skipped)
                .await;
            info!(
                groups = notice.groups,
                events = notice.events,
                skipped = notice.skipped,
                "initial event list loaded"
            );
        }
        Err(error) => {
            warn!(%error, "initial fetch failed; starting with an empty map");
        }
    }

    // Spawn the view API server
    let server = spawn_observer(
        ServerConfig {
            host: config.observer_host.clone(),
            port: config.observer_port,
        },
        Arc::clone(&state),
    )
    .await?;

    // Keep the event list fresh, or just serve if refresh is disabled
    if let Some(interval) = config.refresh_interval {
        info!(interval_secs = interval.as_secs(), "entering refresh loop");
        refresh::run_refresh_loop(state, client, session, interval).await;
    } else {
        info!("periodic refresh disabled; serving the initial delivery");
        let _ = server.await;
    }

    Ok(())
}
