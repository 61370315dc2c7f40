//! View API server for the Lifemap event map.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`WebSocket` endpoint** (`/ws/view`) for delivery notifications via
//!   [`tokio::sync::broadcast`]
//! - **Read endpoints** projecting the current view (markers, overlay,
//!   camera)
//! - **Interaction endpoints** for marker activation, overlay dismiss,
//!   and search-box re-centering
//! - **Minimal HTML status page** (`GET /`) showing marker and event
//!   counts and links to the API endpoints
//!
//! # Architecture
//!
//! The observer wraps the in-memory [`MapView`] from `lifemap-core` in one
//! read-write lock. Reads project the view wholesale per request;
//! interactions take the write lock for exactly one state transition, so
//! every selection change stays on a single serialized timeline. The
//! refresh runner replaces the event list through
//! [`AppState::apply_delivery`], which force-closes any open overlay and
//! notifies `WebSocket` clients.
//!
//! [`MapView`]: lifemap_core::MapView
//! [`AppState::apply_delivery`]: state::AppState::apply_delivery

pub mod error;
pub mod handlers;
pub mod interaction;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use startup::{StartupError, spawn_observer};
pub use state::{AppState, ViewBroadcast, ViewState};
