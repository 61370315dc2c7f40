//! Map-provider hints injected into the view instead of referenced as
//! ambient globals.
//!
//! The map frontend owns the actual animation constants and pixel math;
//! Lifemap only states intent. Each hint is a plain serializable value the
//! frontend translates into its own provider's vocabulary.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geo::LatLng;

/// Marker entrance animation intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum MarkerAnimation {
    /// Drop the marker in from above (the classic pin drop).
    #[default]
    Drop,
    /// Bounce the marker in place.
    Bounce,
    /// Place the marker without animation.
    None,
}

/// Pixel offset between an anchor coordinate and the overlay card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PixelOffset {
    /// Horizontal offset in pixels (positive is right).
    pub x: i32,
    /// Vertical offset in pixels (positive is down).
    pub y: i32,
}

impl PixelOffset {
    /// Offset that positions an overlay card above a standard marker pin.
    pub const ABOVE_MARKER: Self = Self { x: 0, y: -45 };
}

impl Default for PixelOffset {
    fn default() -> Self {
        Self::ABOVE_MARKER
    }
}

/// Viewport the map frontend should show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MapCamera {
    /// Center coordinate of the viewport.
    pub center: LatLng,
    /// Zoom level (map-provider scale, 0 = whole world).
    pub zoom: u8,
}

impl MapCamera {
    /// Zoom level used when centering on a single searched place.
    pub const PLACE_ZOOM: u8 = 15;

    /// Create a camera at the given center and zoom.
    pub const fn new(center: LatLng, zoom: u8) -> Self {
        Self { center, zoom }
    }
}
