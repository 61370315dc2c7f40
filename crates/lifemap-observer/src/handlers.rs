//! Read-side REST handlers for the view API server.
//!
//! All handlers project the in-memory [`MapView`] via the shared
//! [`AppState`]; nothing here mutates selection or camera (see
//! [`crate::interaction`] for that side).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/view` | Combined markers + overlay + camera |
//! | `GET` | `/api/markers` | Marker view-models only |
//! | `GET` | `/api/overlay` | Open overlay view-model or `null` |
//!
//! [`MapView`]: lifemap_core::MapView

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use lifemap_types::{MapCamera, Marker, Overlay, RefreshId};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body of `GET /api/view`.
#[derive(Debug, serde::Serialize)]
pub struct ViewResponse {
    /// Id of the delivery cycle the markers belong to.
    pub refresh: RefreshId,
    /// Viewport the frontend should show.
    pub camera: MapCamera,
    /// One marker per group, in group order.
    pub markers: Vec<Marker>,
    /// The open overlay, if any.
    pub overlay: Option<Overlay>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// This is the placeholder dashboard until the map frontend is wired up.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = state.view.read().await;
    let markers = view.map.group_count();
    let events = view.map.event_count();
    let skipped = view.skipped;
    let overlay = if view.map.overlay().is_some() {
        "open"
    } else {
        "closed"
    };
    let fetched = view
        .fetched_at
        .map_or_else(|| String::from("never"), |t| t.to_rfc3339());

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Lifemap Observer</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Lifemap Observer</h1>
    <p class="subtitle">Event map view server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Markers</div>
            <div class="value">{markers}</div>
        </div>
        <div class="metric">
            <div class="label">Events</div>
            <div class="value">{events}</div>
        </div>
        <div class="metric">
            <div class="label">Skipped docs</div>
            <div class="value">{skipped}</div>
        </div>
        <div class="metric">
            <div class="label">Overlay</div>
            <div class="value">{overlay}</div>
        </div>
    </div>

    <p>Last delivery: {fetched}</p>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/view">/api/view</a> -- markers + overlay + camera</li>
        <li>GET <a href="/api/markers">/api/markers</a> -- marker view-models</li>
        <li>GET <a href="/api/overlay">/api/overlay</a> -- open overlay or null</li>
        <li>PUT /api/selection -- activate a marker</li>
        <li>DELETE /api/selection -- dismiss the overlay</li>
        <li>PUT /api/camera -- re-center on a searched place</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li><code>ws://host:port/ws/view</code> -- delivery notification stream</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/view -- combined projection
// ---------------------------------------------------------------------------

/// Return the whole view projection: markers, overlay, camera, cycle id.
pub async fn get_view(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let view = state.view.read().await;
    Ok(Json(ViewResponse {
        refresh: view.map.refresh(),
        camera: view.map.camera(),
        markers: view.map.markers(),
        overlay: view.map.overlay(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/markers -- marker list
// ---------------------------------------------------------------------------

/// Return one marker view-model per group.
pub async fn get_markers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let view = state.view.read().await;
    let markers = view.map.markers();
    Ok(Json(serde_json::json!({
        "refresh": view.map.refresh(),
        "count": markers.len(),
        "markers": markers,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/overlay -- open overlay
// ---------------------------------------------------------------------------

/// Return the overlay for the open group, or JSON `null` when none is open.
pub async fn get_overlay(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let view = state.view.read().await;
    Ok(Json(view.map.overlay()))
}
