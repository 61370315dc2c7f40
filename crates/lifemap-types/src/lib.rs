//! Shared type definitions for the Lifemap event map.
//!
//! This crate is the single source of truth for all types used across the
//! Lifemap workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the map frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier newtypes for events and delivery cycles
//! - [`geo`] -- Coordinate shapes and the incoming/outgoing translation
//! - [`event`] -- The life event record delivered by the document store
//! - [`hints`] -- Map-provider hints (animation, offsets, camera)
//! - [`view`] -- View-model shapes served to the frontend

pub mod event;
pub mod geo;
pub mod hints;
pub mod ids;
pub mod view;

// Re-export all public types at crate root for convenience.
pub use event::LifeEvent;
pub use geo::{GeoPoint, GroupKey, LatLng, ResolvedPoint};
pub use hints::{MapCamera, MarkerAnimation, PixelOffset};
pub use ids::{EventId, RefreshId};
pub use view::{DismissControl, GroupRef, Marker, Overlay, OverlayEntry};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::EventId::export_all();
        let _ = crate::ids::RefreshId::export_all();

        // Geometry
        let _ = crate::geo::GroupKey::export_all();
        let _ = crate::geo::LatLng::export_all();
        let _ = crate::geo::GeoPoint::export_all();

        // Events
        let _ = crate::event::LifeEvent::export_all();

        // Map hints
        let _ = crate::hints::MarkerAnimation::export_all();
        let _ = crate::hints::PixelOffset::export_all();
        let _ = crate::hints::MapCamera::export_all();

        // View models
        let _ = crate::view::GroupRef::export_all();
        let _ = crate::view::Marker::export_all();
        let _ = crate::view::OverlayEntry::export_all();
        let _ = crate::view::DismissControl::export_all();
        let _ = crate::view::Overlay::export_all();
    }
}
