//! The single-selection state machine: which group's overlay is open.
//!
//! Exactly one group may be open at a time. The only transitions are
//! select (unconditional replace), clear (unconditional, idempotent), and
//! invalidation when the groups a reference points into have been replaced.
//! There is no toggle: selecting the already-open group keeps it open.

use lifemap_types::{GroupRef, RefreshId};

/// Which overlay, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No overlay is open.
    #[default]
    None,
    /// The overlay for the referenced group is open.
    Open(GroupRef),
}

impl Selection {
    /// Whether an overlay is open.
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Owner of the selection state and its transition rules.
///
/// Holds no other state and touches neither events nor groups; callers
/// validate references before handing them in.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    pub const fn new() -> Self {
        Self {
            state: Selection::None,
        }
    }

    /// Read the current selection.
    pub const fn current(&self) -> Selection {
        self.state
    }

    /// Open the referenced group's overlay.
    ///
    /// Unconditional: a previously open group is silently replaced, and
    /// re-selecting the open group leaves it open (no toggle).
    pub fn select(&mut self, reference: GroupRef) {
        self.state = Selection::Open(reference);
    }

    /// Close whatever is open. Idempotent when nothing is.
    pub fn clear(&mut self) {
        self.state = Selection::None;
    }

    /// Degrade to nothing-selected if the open reference predates `current`.
    ///
    /// Called after each groups replacement: a reference minted under an
    /// older delivery cycle would point at dangling data, so it is dropped
    /// rather than re-resolved against the new groups.
    pub fn invalidate(&mut self, current: RefreshId) {
        if let Selection::Open(reference) = self.state {
            if reference.refresh != current {
                self.state = Selection::None;
            }
        }
    }
}
