//! Server startup helper for embedding in the refresh runner.
//!
//! Provides [`spawn_observer`] which launches the view API HTTP +
//! `WebSocket` server on a background Tokio task. The runner binary calls
//! this during startup so the API runs concurrently with the fetch loop.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lifemap_observer::startup::spawn_observer;
//! use lifemap_observer::server::ServerConfig;
//! use lifemap_observer::state::AppState;
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(view));
//! let handle = spawn_observer(ServerConfig::default(), state).await?;
//! // The server is now running. The handle can be awaited on shutdown.
//! ```

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the view API server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the view API server on a background Tokio task.
///
/// Serves the REST API plus the `WebSocket` endpoint for delivery
/// notifications. Returns a [`JoinHandle`] so the caller can manage the
/// server's lifecycle alongside the refresh loop.
///
/// The server runs until the Tokio runtime is shut down or the task is
/// aborted. The caller should hold the returned handle and abort or
/// await it during clean shutdown.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the configured address is not
/// parseable. This is detected eagerly before the background task is
/// spawned.
pub async fn spawn_observer(
    config: ServerConfig,
    state: Arc<AppState>,
) -> Result<JoinHandle<()>, StartupError> {
    // Verify the address is parseable before spawning the background task.
    // The actual bind happens inside start_server, but we catch obvious
    // misconfigurations early.
    let addr_str = format!("{}:{}", config.host, config.port);
    let _: std::net::SocketAddr = addr_str.parse().map_err(|e| {
        StartupError::Server(ServerError::Bind(format!("invalid address {addr_str}: {e}")))
    })?;

    let handle = tokio::spawn(async move {
        if let Err(e) = crate::server::start_server(&config, state).await {
            tracing::error!(error = %e, "view API server exited with error");
        }
    });

    tracing::info!(addr = %addr_str, "view API server spawned on background task");

    Ok(handle)
}
