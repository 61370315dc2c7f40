//! Shared application state for the view API server.
//!
//! [`AppState`] holds the live [`MapView`] plus the broadcast channel that
//! tells connected frontends a new delivery replaced the marker set. All
//! request handlers read and mutate the view through one `RwLock`, which
//! keeps every selection transition on a single serialized timeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lifemap_core::MapView;
use lifemap_types::{LifeEvent, RefreshId};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the broadcast channel for delivery notifications.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// JSON-serializable notice pushed over the `WebSocket` after each delivery.
///
/// Frontends react by refetching markers; an overlay they had open was
/// force-closed by the replacement and disappears on the next view read.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ViewBroadcast {
    /// Id of the new delivery cycle.
    pub refresh: RefreshId,
    /// Number of marker groups in the new cycle.
    pub groups: usize,
    /// Number of grouped events in the new cycle.
    pub events: usize,
    /// Number of store documents skipped as undecodable.
    pub skipped: usize,
}

/// The view plus delivery bookkeeping the status page reports.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The live map view (groups, selection, camera).
    pub map: MapView,
    /// When the most recent delivery was fetched, if any arrived yet.
    pub fetched_at: Option<DateTime<Utc>>,
    /// Undecodable-document count of the most recent delivery.
    pub skipped: usize,
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Broadcast sender for delivery notifications.
    pub tx: broadcast::Sender<ViewBroadcast>,
    /// The live view state, behind one read-write lock.
    pub view: Arc<RwLock<ViewState>>,
}

impl AppState {
    /// Create application state around an initial (usually empty) view.
    pub fn new(map: MapView) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            view: Arc::new(RwLock::new(ViewState {
                map,
                fetched_at: None,
                skipped: 0,
            })),
        }
    }

    /// Subscribe to delivery notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ViewBroadcast> {
        self.tx.subscribe()
    }

    /// Apply one event-list delivery and notify connected clients.
    ///
    /// Replaces the view's groups wholesale (force-closing any open
    /// overlay), records the delivery metadata, and broadcasts the new
    /// cycle. Returns the notice that was broadcast.
    pub async fn apply_delivery(
        &self,
        events: &[LifeEvent],
        fetched_at: DateTime<Utc>,
        skipped: usize,
    ) -> ViewBroadcast {
        let notice = {
            let mut state = self.view.write().await;
            let refresh = state.map.replace_events(events);
            state.fetched_at = Some(fetched_at);
            state.skipped = skipped;
            ViewBroadcast {
                refresh,
                groups: state.map.group_count(),
                events: state.map.event_count(),
                skipped,
            }
        };

        // send returns Err only when there are zero receivers, which is
        // normal when no WebSocket clients are connected.
        let _ = self.tx.send(notice.clone());
        notice
    }
}
