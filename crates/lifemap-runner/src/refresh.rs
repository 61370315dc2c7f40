//! The periodic event-list refresh loop.
//!
//! Each completed fetch is the sole trigger for a groups recomputation:
//! the delivery replaces the view's event list wholesale and force-closes
//! any open overlay. A failed fetch is logged and absorbed -- the previous
//! delivery keeps being served, and the loop tries again next interval.

use std::sync::Arc;
use std::time::Duration;

use lifemap_data::{StoreClient, StoreSession};
use lifemap_observer::AppState;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Refetch the event list on a fixed interval, forever.
///
/// The initial delivery is applied by the caller before this loop starts;
/// the first interval elapses before the first refetch.
pub async fn run_refresh_loop(
    state: Arc<AppState>,
    client: StoreClient,
    session: StoreSession,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately; consume it
    // so the loop waits a full interval after the initial delivery.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match client.fetch_events(&session).await {
            Ok(delivery) => {
                let notice = state
                    .apply_delivery(&delivery.events, delivery.fetched_at, delivery.skipped)
                    .await;
                info!(
                    refresh = %notice.refresh,
                    groups = notice.groups,
                    events = notice.events,
                    skipped = notice.skipped,
                    "event list refreshed"
                );
            }
            Err(error) => {
                warn!(%error, "event refresh failed; keeping previous delivery");
            }
        }
    }
}
