//! The life event record as delivered by the document store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::geo::GeoPoint;
use crate::ids::EventId;

/// One geotagged life event.
///
/// Events are externally supplied and immutable once delivered: each fetch
/// cycle replaces the whole list, nothing is patched in place. Display
/// fields default to empty when the stored document omits them; only the
/// coordinate decides whether an event can appear on the map at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LifeEvent {
    /// Opaque document id, stable across fetches.
    pub id: EventId,
    /// Where the event happened. Events without a resolvable coordinate are
    /// excluded from grouping (logged, never fatal).
    #[serde(default)]
    pub place: Option<GeoPoint>,
    /// Display title; may be empty.
    #[serde(default)]
    pub heading: String,
    /// Display date string; may be empty. Never parsed, shown verbatim.
    #[serde(default)]
    pub date: String,
    /// Free-text description. Embedded line breaks are preserved on render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl LifeEvent {
    /// Create an event with a numeric coordinate and the given display fields.
    pub fn new(
        id: impl Into<EventId>,
        place: GeoPoint,
        heading: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            place: Some(place),
            heading: heading.into(),
            date: date.into(),
            explanation: None,
        }
    }

    /// Attach free-text explanation to the event.
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
