//! Paper and digest domain models.
//!
//! A digest is a dated, immutable list of paper recommendations produced by
//! an external generator. This crate only reads them.

mod model;

pub use model::{Digest, DigestSummary, Paper, ScoreTier};
