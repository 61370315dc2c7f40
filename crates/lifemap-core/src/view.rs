//! The map view composition root.
//!
//! [`MapView`] owns the derived groups of the current delivery cycle, the
//! selection controller, and the injected map hints, and exposes the whole
//! interaction surface: replace the event list, emit markers, resolve
//! marker activations, dismiss, project the overlay, re-center the camera.
//!
//! All transitions are synchronous and serialized by the owner; the view
//! performs no I/O and never blocks.

use lifemap_types::{
    GroupRef, LatLng, LifeEvent, MapCamera, Marker, MarkerAnimation, Overlay, PixelOffset,
    RefreshId,
};
use tracing::{debug, warn};

use crate::error::ViewError;
use crate::group::{MarkerGroup, group_events};
use crate::overlay;
use crate::selection::{Selection, SelectionController};

/// Groups, selection, and camera for one map, wired together.
#[derive(Debug, Clone)]
pub struct MapView {
    groups: Vec<MarkerGroup>,
    refresh: RefreshId,
    selection: SelectionController,
    animation: MarkerAnimation,
    overlay_offset: PixelOffset,
    camera: MapCamera,
}

impl MapView {
    /// Create an empty view with the injected map hints.
    ///
    /// Hints are explicit capabilities rather than ambient map-provider
    /// globals, so the view is fully exercisable without a live map.
    pub fn new(animation: MarkerAnimation, overlay_offset: PixelOffset, camera: MapCamera) -> Self {
        Self {
            groups: Vec::new(),
            refresh: RefreshId::new(),
            selection: SelectionController::new(),
            animation,
            overlay_offset,
            camera,
        }
    }

    /// Replace the event list with a fresh delivery.
    ///
    /// Groups are recomputed wholesale (old groups are discarded, never
    /// patched), a new delivery cycle id is minted, and any open selection
    /// from the previous cycle degrades to nothing-selected. Returns the
    /// new cycle id.
    pub fn replace_events(&mut self, events: &[LifeEvent]) -> RefreshId {
        self.groups = group_events(events);
        self.refresh = RefreshId::new();
        self.selection.invalidate(self.refresh);

        debug!(
            refresh = %self.refresh,
            groups = self.groups.len(),
            events = events.len(),
            "event list replaced"
        );
        self.refresh
    }

    /// One marker per group, in group order, at the group's coordinate.
    ///
    /// Markers carry no selection styling; the open overlay is the only
    /// selection visual.
    pub fn markers(&self) -> Vec<Marker> {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| Marker {
                group: GroupRef::new(self.refresh, index),
                position: group.place,
                animation: self.animation,
            })
            .collect()
    }

    /// Resolve a marker activation into a selection.
    ///
    /// Selecting an already-open group keeps its overlay open; selecting
    /// another silently replaces it. References from an older delivery
    /// cycle or beyond the current group count are rejected.
    pub fn activate_marker(&mut self, reference: GroupRef) -> Result<(), ViewError> {
        if reference.refresh != self.refresh {
            return Err(ViewError::StaleRefresh {
                requested: reference.refresh,
                current: self.refresh,
            });
        }
        if reference.index >= self.groups.len() {
            return Err(ViewError::UnknownMarker {
                index: reference.index,
                count: self.groups.len(),
            });
        }

        self.selection.select(reference);
        Ok(())
    }

    /// Close the open overlay. Idempotent when none is open.
    pub fn dismiss(&mut self) {
        self.selection.clear();
    }

    /// Project the overlay for the current selection, if any.
    pub fn overlay(&self) -> Option<Overlay> {
        overlay::present(&self.groups, self.selection.current(), self.overlay_offset)
    }

    /// Re-center the camera on a place supplied by the search box.
    ///
    /// Snaps to the single-place zoom level. A non-finite target is ignored
    /// (the previous camera stays in effect).
    pub fn recenter(&mut self, target: LatLng) {
        if !target.is_finite() {
            warn!("ignoring re-center to non-finite coordinate");
            return;
        }
        self.camera = MapCamera::new(target, MapCamera::PLACE_ZOOM);
    }

    /// The viewport the frontend should currently show.
    pub const fn camera(&self) -> MapCamera {
        self.camera
    }

    /// Id of the delivery cycle the current groups belong to.
    pub const fn refresh(&self) -> RefreshId {
        self.refresh
    }

    /// Current selection state.
    pub const fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// The derived groups of the current cycle.
    pub fn groups(&self) -> &[MarkerGroup] {
        &self.groups
    }

    /// Number of groups (= markers) in the current cycle.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of grouped (valid) events in the current cycle.
    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|group| group.events.len()).sum()
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(
            MarkerAnimation::default(),
            PixelOffset::default(),
            MapCamera::new(LatLng::new(0.0, 0.0), 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use lifemap_types::GeoPoint;

    use super::*;

    fn tokyo_view() -> MapView {
        MapView::new(
            MarkerAnimation::Drop,
            PixelOffset::ABOVE_MARKER,
            MapCamera::new(LatLng::new(35.6812, 139.7671), 10),
        )
    }

    fn event(id: &str, lat: f64, lng: f64) -> LifeEvent {
        LifeEvent::new(id, GeoPoint::numeric(lat, lng), id.to_uppercase(), "2020")
    }

    fn first_marker(view: &MapView) -> Option<Marker> {
        view.markers().first().copied()
    }

    #[test]
    fn empty_view_has_no_markers_and_no_overlay() {
        let view = tokyo_view();
        assert!(view.markers().is_empty());
        assert!(view.overlay().is_none());
        assert_eq!(view.selection(), Selection::None);
    }

    #[test]
    fn one_marker_per_group_with_injected_animation() {
        let mut view = tokyo_view();
        view.replace_events(&[
            event("a", 35.0, 139.0),
            event("b", 35.0, 139.0),
            event("c", 34.0, 138.0),
        ]);

        let markers = view.markers();
        assert_eq!(markers.len(), 2);
        assert!(
            markers
                .iter()
                .all(|m| m.animation == MarkerAnimation::Drop)
        );
        assert_eq!(
            markers.iter().map(|m| m.group.index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn activating_a_marker_opens_its_overlay() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0), event("b", 35.0, 139.0)]);

        let marker = first_marker(&view);
        assert!(marker.is_some());
        if let Some(m) = marker {
            assert!(view.activate_marker(m.group).is_ok());
        }

        let overlay = view.overlay();
        assert_eq!(overlay.as_ref().map(|o| o.entries.len()), Some(2));
        assert_eq!(overlay.map(|o| o.anchor), Some(LatLng::new(35.0, 139.0)));
    }

    #[test]
    fn reactivating_the_open_marker_keeps_the_overlay() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0), event("b", 35.0, 139.0)]);

        if let Some(m) = first_marker(&view) {
            assert!(view.activate_marker(m.group).is_ok());
            let before = view.overlay();
            assert!(view.activate_marker(m.group).is_ok());
            // Still open, same content.
            assert_eq!(view.overlay(), before);
        }
    }

    #[test]
    fn dismiss_closes_and_stays_closed() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0)]);

        if let Some(m) = first_marker(&view) {
            assert!(view.activate_marker(m.group).is_ok());
        }
        assert!(view.overlay().is_some());

        view.dismiss();
        assert!(view.overlay().is_none());
        view.dismiss();
        assert!(view.overlay().is_none());
    }

    #[test]
    fn replacing_events_force_closes_the_overlay() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0)]);
        if let Some(m) = first_marker(&view) {
            assert!(view.activate_marker(m.group).is_ok());
        }
        assert!(view.overlay().is_some());

        // New delivery, same coordinates -- the selection still resets.
        view.replace_events(&[event("a", 35.0, 139.0)]);
        assert_eq!(view.selection(), Selection::None);
        assert!(view.overlay().is_none());
    }

    #[test]
    fn stale_references_are_rejected() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0)]);
        let stale = first_marker(&view).map(|m| m.group);

        view.replace_events(&[event("a", 35.0, 139.0)]);

        if let Some(reference) = stale {
            let result = view.activate_marker(reference);
            assert!(matches!(result, Err(ViewError::StaleRefresh { .. })));
        }
        assert_eq!(view.selection(), Selection::None);
    }

    #[test]
    fn out_of_range_references_are_rejected() {
        let mut view = tokyo_view();
        view.replace_events(&[event("a", 35.0, 139.0)]);

        let result = view.activate_marker(GroupRef::new(view.refresh(), 9));
        assert!(matches!(
            result,
            Err(ViewError::UnknownMarker { index: 9, count: 1 })
        ));
        assert_eq!(view.selection(), Selection::None);
    }

    #[test]
    fn recenter_snaps_to_place_zoom() {
        let mut view = tokyo_view();
        view.recenter(LatLng::new(34.7, 135.5));

        let camera = view.camera();
        assert_eq!(camera.center, LatLng::new(34.7, 135.5));
        assert_eq!(camera.zoom, MapCamera::PLACE_ZOOM);
    }

    #[test]
    fn recenter_ignores_non_finite_targets() {
        let mut view = tokyo_view();
        let before = view.camera();
        view.recenter(LatLng::new(f64::NAN, 135.5));
        assert_eq!(view.camera(), before);
    }

    #[test]
    fn counts_follow_the_current_cycle() {
        let mut view = tokyo_view();
        view.replace_events(&[
            event("a", 35.0, 139.0),
            event("b", 35.0, 139.0),
            event("c", 34.0, 138.0),
        ]);
        assert_eq!(view.group_count(), 2);
        assert_eq!(view.event_count(), 3);

        view.replace_events(&[]);
        assert_eq!(view.group_count(), 0);
        assert_eq!(view.event_count(), 0);
    }
}
