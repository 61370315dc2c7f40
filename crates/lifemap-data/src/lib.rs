//! Document store client for the Lifemap event map.
//!
//! This crate is the data-provider collaborator: it bootstraps an
//! anonymous session with the remote document store and fetches the life
//! event list over HTTP. Each fetch is delivered as a full replacement;
//! the view core treats a delivery as immutable input and derives its
//! marker groups from scratch.
//!
//! # Modules
//!
//! - [`client`] -- HTTP client, connection settings, the delivery type
//! - [`decode`] -- Lenient per-document decoding
//! - [`session`] -- Anonymous session grant
//! - [`error`] -- Store client errors

pub mod client;
pub mod decode;
pub mod error;
pub mod session;

// Re-export primary types for convenience.
pub use client::{EventDelivery, StoreClient, StoreConfig};
pub use decode::decode_documents;
pub use error::DataError;
pub use session::StoreSession;
