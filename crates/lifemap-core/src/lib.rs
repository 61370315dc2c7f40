//! Marker grouping and overlay selection core for the Lifemap event map.
//!
//! This crate decides which events are visually merged into one marker and
//! which marker's detail overlay is currently open. It is pure and
//! synchronous: no I/O, no timers, no map-provider bindings. Everything a
//! map frontend needs is expressed as view-model values from
//! `lifemap-types`.
//!
//! # Modules
//!
//! - [`group`] -- Partition the flat event list into exact-coordinate groups
//! - [`selection`] -- The single-selection state machine
//! - [`overlay`] -- Project the open group into an overlay card
//! - [`view`] -- [`MapView`], the composition root wiring the above
//! - [`error`] -- Interaction-boundary errors
//!
//! # State machine
//!
//! States `{nothing-open, one-group-open}`. Marker activation opens that
//! marker's group (replacing any open one, including itself); dismiss
//! closes; replacing the event list force-closes. The machine is long-lived
//! for the life of the view and has no terminal state.

pub mod error;
pub mod group;
pub mod overlay;
pub mod selection;
pub mod view;

// Re-export primary types at crate root.
pub use error::ViewError;
pub use group::{MarkerGroup, group_events};
pub use overlay::present;
pub use selection::{Selection, SelectionController};
pub use view::MapView;
