//! Domain layer for digestdesk.
//!
//! Holds the paper/digest/favorites models, the shared error type and the
//! traits that the infrastructure and interaction crates implement.

pub mod config;
pub mod digest_source;
pub mod error;
pub mod favorites;
pub mod paper;
pub mod remote;
pub mod settings;

// Re-export common error type
pub use error::DeskError;
