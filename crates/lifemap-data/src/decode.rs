//! Lenient decoding of stored documents into life events.
//!
//! Documents are decoded one by one: a malformed document is skipped with
//! a warning and never fails the delivery. The grouping core applies its
//! own coordinate validation later; this layer only requires that a
//! document is an object with an id and otherwise event-shaped fields.

use lifemap_types::LifeEvent;
use serde_json::Value;
use tracing::warn;

/// Decode a batch of raw documents, skipping the malformed ones.
///
/// Returns the decoded events in document order plus the number skipped.
pub fn decode_documents(documents: Vec<Value>) -> (Vec<LifeEvent>, usize) {
    let mut events = Vec::with_capacity(documents.len());
    let mut skipped: usize = 0;

    for document in documents {
        match serde_json::from_value::<LifeEvent>(document) {
            Ok(event) => events.push(event),
            Err(error) => {
                skipped = skipped.saturating_add(1);
                warn!(%error, "skipping undecodable document");
            }
        }
    }

    (events, skipped)
}
