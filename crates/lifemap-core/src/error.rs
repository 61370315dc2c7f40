//! Error types for the `lifemap-core` crate.
//!
//! The core degrades most anomalies locally (skip the event, close the
//! overlay); errors exist only at the composition boundary, where an
//! interaction can reference a marker that no longer exists.

use lifemap_types::RefreshId;

/// Errors raised when resolving an interaction against the current view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The referenced marker index does not exist in the current groups.
    #[error("no marker at index {index} (current group count: {count})")]
    UnknownMarker {
        /// The requested group index.
        index: usize,
        /// Number of groups in the current delivery cycle.
        count: usize,
    },

    /// The reference was minted under an older delivery cycle.
    #[error("stale marker reference: minted under {requested}, current cycle is {current}")]
    StaleRefresh {
        /// The cycle the reference was minted under.
        requested: RefreshId,
        /// The cycle currently in effect.
        current: RefreshId,
    },
}
