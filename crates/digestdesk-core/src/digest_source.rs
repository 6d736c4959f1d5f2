//! Digest reader trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::paper::{Digest, DigestSummary};

/// Read-only access to published digests.
#[async_trait]
pub trait DigestSource: Send + Sync {
    /// Lists available digests, newest first as published in the index.
    ///
    /// Any failure degrades to an empty list.
    async fn list_digests(&self) -> Vec<DigestSummary>;

    /// Loads one digest by date.
    ///
    /// Fails with `DeskError::NotFound` when no digest exists for `date`.
    async fn load_digest(&self, date: &str) -> Result<Digest>;
}
