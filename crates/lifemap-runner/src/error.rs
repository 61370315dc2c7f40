//! Error types for the refresh runner.
//!
//! Uses `thiserror` for typed errors that surface through startup: bad
//! configuration, store bootstrap failures, server spawn failures. Once
//! the runner is up, fetch errors are logged and absorbed by the loop
//! instead of propagating here.

use lifemap_data::DataError;
use lifemap_observer::StartupError;

/// Errors that can occur while starting the refresh runner.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),

    /// The document store rejected the bootstrap or initial fetch.
    #[error("store error: {0}")]
    Data(#[from] DataError),

    /// The view API server could not be spawned.
    #[error("startup error: {0}")]
    Startup(#[from] StartupError),
}
