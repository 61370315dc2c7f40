//! View-model shapes served to the map frontend.
//!
//! These are pure projections of the current groups and selection: the
//! frontend renders them as-is and reports interactions back by reference.
//! None of them carry live state -- a new projection is computed wholesale
//! whenever groups or selection change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geo::LatLng;
use crate::hints::{MarkerAnimation, PixelOffset};
use crate::ids::RefreshId;

/// Reference to one marker group within one specific delivery cycle.
///
/// The `refresh` stamp pins the reference to the groups it was minted
/// against; after the event list is replaced, old references are stale and
/// are rejected rather than resolved against the new groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GroupRef {
    /// The delivery cycle the referenced groups belong to.
    pub refresh: RefreshId,
    /// Position of the group in that cycle's group sequence.
    pub index: usize,
}

impl GroupRef {
    /// Create a reference into the given delivery cycle.
    pub const fn new(refresh: RefreshId, index: usize) -> Self {
        Self { refresh, index }
    }
}

/// One map marker: one marker per group, positioned at the group's
/// coordinate literal.
///
/// Markers carry no selection styling; which overlay is open is expressed
/// solely through the overlay projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Marker {
    /// Reference the frontend reports back on marker activation.
    pub group: GroupRef,
    /// Where to place the marker.
    pub position: LatLng,
    /// Entrance animation intent.
    pub animation: MarkerAnimation,
}

/// One event's slice of the overlay card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OverlayEntry {
    /// Event title; may be empty.
    pub heading: String,
    /// Event date string; may be empty.
    pub date: String,
    /// Free text with embedded line breaks preserved verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Whether a visual separator follows this entry. True for every entry
    /// except the last one in the card.
    pub divider: bool,
}

/// The single explicit close affordance on an overlay card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DismissControl {
    /// Text shown on the control.
    pub label: String,
}

impl DismissControl {
    /// The standard close glyph.
    pub fn standard() -> Self {
        Self {
            label: String::from("\u{00d7}"),
        }
    }
}

/// Detail card for the currently open group.
///
/// At most one overlay exists at a time, regardless of marker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Overlay {
    /// Coordinate the card is anchored at (the group's position).
    pub anchor: LatLng,
    /// Pixel offset between anchor and card.
    pub offset: PixelOffset,
    /// One entry per event in the group, in original list order.
    pub entries: Vec<OverlayEntry>,
    /// Exactly one dismiss control; activating it clears the selection.
    pub dismiss: DismissControl,
}
