//! Axum router construction for the view API.
//!
//! Assembles all routes (REST + `WebSocket`) into a single [`Router`]
//! with CORS middleware enabled so the map frontend can be served from
//! another origin during development.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::interaction;
use crate::state::AppState;
use crate::ws;

/// Build the complete Axum router for the view API server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /ws/view` -- `WebSocket` delivery notification stream
/// - `GET /api/view` -- combined markers + overlay + camera
/// - `GET /api/markers` -- marker view-models
/// - `GET /api/overlay` -- open overlay or `null`
/// - `PUT /api/selection` / `DELETE /api/selection` -- activate / dismiss
/// - `PUT /api/camera` -- re-center on a searched place
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // WebSocket
        .route("/ws/view", get(ws::ws_view))
        // REST API
        .route("/api/view", get(handlers::get_view))
        .route("/api/markers", get(handlers::get_markers))
        .route("/api/overlay", get(handlers::get_overlay))
        .route(
            "/api/selection",
            put(interaction::select).delete(interaction::dismiss),
        )
        .route("/api/camera", put(interaction::recenter))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
