//! Partitioning of the flat event list into coordinate groups.
//!
//! One group per exact coordinate, one marker per group. Grouping is by
//! exact value identity of the source coordinate ([`GroupKey`]), never by
//! proximity; visually-near-but-distinct coordinates stay separate markers
//! (spatial clustering is the map provider's concern).

use std::collections::HashMap;

use lifemap_types::{GroupKey, LatLng, LifeEvent};
use tracing::warn;

/// The events sharing one exact coordinate, in original list order.
///
/// Derived state: recomputed wholesale from each event-list delivery and
/// discarded on the next, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGroup {
    /// Exact-match coordinate key the members share.
    pub key: GroupKey,
    /// The coordinate as a map-consumable literal.
    pub place: LatLng,
    /// Member events, in the order they appeared in the delivered list.
    pub events: Vec<LifeEvent>,
}

/// Partition events into coordinate groups.
///
/// Pure function of its input: iterating the same list twice yields the
/// same groups with the same membership and ordering.
///
/// Groups appear in first-occurrence order of their coordinate across the
/// input; members keep input order within each group. Events without a
/// resolvable coordinate (missing, non-numeric, non-finite, or out of
/// geographic range) are skipped with a warning and never abort the rest.
pub fn group_events(events: &[LifeEvent]) -> Vec<MarkerGroup> {
    let mut groups: Vec<MarkerGroup> = Vec::new();
    let mut index_by_key: HashMap<GroupKey, usize> = HashMap::new();

    for event in events {
        let Some(point) = event.place.as_ref().and_then(|place| place.resolve()) else {
            warn!(event_id = %event.id, "skipping event without a valid coordinate");
            continue;
        };

        let key = point.key();
        if let Some(&index) = index_by_key.get(&key) {
            if let Some(group) = groups.get_mut(index) {
                group.events.push(event.clone());
            }
        } else {
            index_by_key.insert(key.clone(), groups.len());
            groups.push(MarkerGroup {
                key,
                place: point.to_lat_lng(),
                events: vec![event.clone()],
            });
        }
    }

    groups
}
