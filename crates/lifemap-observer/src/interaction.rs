//! Interaction REST handlers: marker activation, dismiss, camera moves.
//!
//! These are the write side of the view API -- the HTTP face of the
//! frontend's click handlers. Each handler takes the view write lock for
//! the duration of one transition, which keeps the selection state machine
//! on a single serialized timeline.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `PUT` | `/api/selection` | Activate a marker (open its overlay) |
//! | `DELETE` | `/api/selection` | Dismiss the open overlay |
//! | `PUT` | `/api/camera` | Re-center on a search-provider place |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use lifemap_core::ViewError;
use lifemap_types::{GroupRef, LatLng};

use crate::error::ObserverError;
use crate::state::AppState;

/// Generic success response.
#[derive(Debug, serde::Serialize)]
struct InteractionResponse {
    /// Whether the operation succeeded.
    ok: bool,
    /// Human-readable message.
    message: String,
}

// ---------------------------------------------------------------------------
// PUT /api/selection
// ---------------------------------------------------------------------------

/// Activate the referenced marker, opening its group's overlay.
///
/// Re-activating the open marker keeps its overlay open; activating
/// another replaces it. A reference from a replaced delivery cycle is
/// rejected with `409 Conflict`, an out-of-range index with `404`.
pub async fn select(
    State(state): State<Arc<AppState>>,
    Json(reference): Json<GroupRef>,
) -> Result<impl IntoResponse, ObserverError> {
    let mut view = state.view.write().await;

    view.map
        .activate_marker(reference)
        .map_err(|error| match error {
            ViewError::UnknownMarker { .. } => ObserverError::NotFound(error.to_string()),
            ViewError::StaleRefresh { .. } => ObserverError::StaleSelection(error.to_string()),
        })?;

    Ok(Json(InteractionResponse {
        ok: true,
        message: format!("overlay open for marker {}", reference.index),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /api/selection
// ---------------------------------------------------------------------------

/// Dismiss the open overlay. Succeeds (and stays closed) when none is open.
pub async fn dismiss(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let mut view = state.view.write().await;
    view.map.dismiss();

    Ok(Json(InteractionResponse {
        ok: true,
        message: String::from("overlay dismissed"),
    }))
}

// ---------------------------------------------------------------------------
// PUT /api/camera
// ---------------------------------------------------------------------------

/// Re-center the camera on a place picked in the search box.
///
/// The body is the search provider's `{lat, lng}` literal. Non-finite
/// coordinates are rejected with `400`.
pub async fn recenter(
    State(state): State<Arc<AppState>>,
    Json(target): Json<LatLng>,
) -> Result<impl IntoResponse, ObserverError> {
    if !target.is_finite() {
        return Err(ObserverError::InvalidRequest(String::from(
            "camera target must have finite lat and lng",
        )));
    }

    let mut view = state.view.write().await;
    view.map.recenter(target);
    let camera = view.map.camera();

    Ok(Json(serde_json::json!({
        "ok": true,
        "camera": camera,
    })))
}
