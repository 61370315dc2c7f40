//! Error types for the document store client.
//!
//! Store failures never reach the view core: the runner logs them and
//! keeps serving the previous delivery. These errors exist so the caller
//! can tell transport trouble from a rejecting store from a decode bug.

/// Errors that can occur while talking to the document store.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The HTTP request could not be sent or the response not read.
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("store response decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The anonymous session bootstrap failed or returned an unusable grant.
    #[error("session bootstrap failed: {0}")]
    Session(String),
}
