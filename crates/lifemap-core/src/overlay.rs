//! Projection of the current selection into an overlay view-model.
//!
//! Pure: given the same groups and selection, the same card comes out. The
//! card carries one entry per event in the open group, a separator between
//! consecutive entries, and exactly one dismiss control. A defective
//! selection (index out of range after a replacement raced in, or a
//! non-finite anchor) renders nothing rather than undefined content.

use lifemap_types::{DismissControl, Overlay, OverlayEntry, PixelOffset};

use crate::group::MarkerGroup;
use crate::selection::Selection;

/// Render the overlay for the current selection, if any.
///
/// Returns `None` when nothing is selected, when the reference does not
/// resolve into `groups`, or when the group's anchor is not a finite
/// coordinate.
pub fn present(
    groups: &[MarkerGroup],
    selection: Selection,
    offset: PixelOffset,
) -> Option<Overlay> {
    let Selection::Open(reference) = selection else {
        return None;
    };

    let group = groups.get(reference.index)?;
    if !group.place.is_finite() {
        return None;
    }

    let mut entries: Vec<OverlayEntry> = group
        .events
        .iter()
        .map(|event| OverlayEntry {
            heading: event.heading.clone(),
            date: event.date.clone(),
            explanation: event.explanation.clone(),
            divider: true,
        })
        .collect();

    // Separators go between consecutive entries, never after the last.
    if let Some(last) = entries.last_mut() {
        last.divider = false;
    }

    Some(Overlay {
        anchor: group.place,
        offset,
        entries,
        dismiss: DismissControl::standard(),
    })
}

#[cfg(test)]
mod tests {
    use lifemap_types::{GeoPoint, GroupKey, GroupRef, LatLng, LifeEvent, RefreshId};

    use super::*;

    fn group_of(events: Vec<LifeEvent>) -> MarkerGroup {
        MarkerGroup {
            key: GroupKey(String::from("35,139")),
            place: LatLng::new(35.0, 139.0),
            events,
        }
    }

    fn open(index: usize) -> Selection {
        Selection::Open(GroupRef::new(RefreshId::new(), index))
    }

    #[test]
    fn nothing_selected_renders_nothing() {
        let groups = vec![group_of(vec![LifeEvent::new(
            "1",
            GeoPoint::numeric(35.0, 139.0),
            "A",
            "2020",
        )])];
        assert!(present(&groups, Selection::None, PixelOffset::default()).is_none());
    }

    #[test]
    fn two_event_group_renders_both_with_one_divider() {
        let groups = vec![group_of(vec![
            LifeEvent::new("1", GeoPoint::numeric(35.0, 139.0), "First", "2019")
                .with_explanation("moved in\nwith two boxes"),
            LifeEvent::new("2", GeoPoint::numeric(35.0, 139.0), "Second", "2021"),
        ])];

        let overlay = present(&groups, open(0), PixelOffset::default());
        assert!(overlay.is_some());
        if let Some(card) = overlay {
            assert_eq!(card.anchor, LatLng::new(35.0, 139.0));
            assert_eq!(card.entries.len(), 2);
            assert_eq!(
                card.entries.iter().map(|e| e.divider).collect::<Vec<_>>(),
                vec![true, false]
            );
            assert_eq!(
                card.entries.first().map(|e| e.heading.as_str()),
                Some("First")
            );
            // Embedded line breaks come through verbatim.
            assert_eq!(
                card.entries.first().and_then(|e| e.explanation.as_deref()),
                Some("moved in\nwith two boxes")
            );
            assert_eq!(card.dismiss.label, "\u{00d7}");
        }
    }

    #[test]
    fn single_event_group_has_no_divider() {
        let groups = vec![group_of(vec![LifeEvent::new(
            "1",
            GeoPoint::numeric(35.0, 139.0),
            "Only",
            "2022",
        )])];

        let overlay = present(&groups, open(0), PixelOffset::default());
        assert_eq!(
            overlay.map(|c| c.entries.iter().map(|e| e.divider).collect::<Vec<_>>()),
            Some(vec![false])
        );
    }

    #[test]
    fn dangling_index_renders_nothing() {
        let groups = vec![group_of(vec![LifeEvent::new(
            "1",
            GeoPoint::numeric(35.0, 139.0),
            "A",
            "2020",
        )])];
        assert!(present(&groups, open(7), PixelOffset::default()).is_none());
    }

    #[test]
    fn non_finite_anchor_renders_nothing() {
        let mut group = group_of(vec![LifeEvent::new(
            "1",
            GeoPoint::numeric(35.0, 139.0),
            "A",
            "2020",
        )]);
        group.place = LatLng::new(f64::NAN, 139.0);

        assert!(present(&[group], open(0), PixelOffset::default()).is_none());
    }

    #[test]
    fn offset_hint_is_carried_through() {
        let groups = vec![group_of(vec![LifeEvent::new(
            "1",
            GeoPoint::numeric(35.0, 139.0),
            "A",
            "2020",
        )])];
        let offset = PixelOffset { x: 4, y: -60 };
        assert_eq!(
            present(&groups, open(0), offset).map(|c| c.offset),
            Some(offset)
        );
    }
}
