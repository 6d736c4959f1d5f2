//! Application layer for digestdesk.
//!
//! Wires the remote store, digest readers and settings into the favorites
//! store and the three page flows (digest list, single digest, favorites).

pub mod favorites_store;
pub mod pages;
pub mod renderer;

#[cfg(test)]
mod test_support;

pub use favorites_store::{FavoritesStore, LoadOutcome};
pub use pages::{DigestPage, DigestQuery, FavoritesPage, ListPage, SaveOutcome};
pub use renderer::{CardOptions, DigestEntry, PaperCard, Renderer};
