//! Identifier types for events and data-delivery cycles.
//!
//! [`EventId`] wraps the opaque document identifier assigned by the remote
//! document store. It is a string, not a UUID, because the store's ids are
//! opaque tokens that must round-trip unchanged and stay stable across
//! fetches.
//!
//! [`RefreshId`] stamps one data-delivery cycle. Every time the event list
//! is replaced wholesale, a fresh `RefreshId` is minted; references into the
//! derived marker groups carry the id of the cycle they were minted under so
//! stale references can be detected after a refresh. Uses UUID v7
//! (time-ordered) so delivery cycles sort chronologically.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Opaque identifier of a life event document in the remote store.
///
/// Stable across fetches; never parsed or interpreted by Lifemap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventId(pub String);

impl EventId {
    /// Create an event id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier of one data-delivery cycle (one wholesale event-list replacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RefreshId(pub Uuid);

impl RefreshId {
    /// Mint the id for a new delivery cycle using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RefreshId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RefreshId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RefreshId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<RefreshId> for Uuid {
    fn from(id: RefreshId) -> Self {
        id.0
    }
}
