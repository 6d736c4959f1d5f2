//! Remote store abstraction.
//!
//! The remote store is a file-oriented content API (GitHub contents API in
//! production). Every read hands out a [`Revision`] and every write must send
//! back the revision of the version it replaces, so concurrent writers cannot
//! silently overwrite each other.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Opaque token identifying one version of a remote file (a blob sha).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded remote JSON document with the revision it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFile {
    pub content: serde_json::Value,
    pub revision: Revision,
}

/// Inputs of the digest generation job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParameters {
    /// Comma separated category list, e.g. `cs.AI,cs.CL`.
    pub categories: String,
    pub interests: String,
}

/// Content API of the repository that hosts the favorites document.
///
/// None of the operations retry. Errors surface to the caller.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Reads a JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RemoteFile))`: file exists and decoded
    /// - `Ok(None)`: no such file yet
    /// - `Err(DeskError::Remote)`: any other non-success response
    async fn read_file(&self, path: &str) -> Result<Option<RemoteFile>>;

    /// Writes a JSON file, replacing the version identified by `revision`.
    ///
    /// `revision` is `None` only when creating the file. Fails with
    /// `DeskError::Unauthenticated` before any I/O when no credential is set,
    /// and with `DeskError::Remote` when the server rejects the write
    /// (including a stale revision).
    async fn write_file(
        &self,
        path: &str,
        content: &serde_json::Value,
        revision: Option<&Revision>,
        message: &str,
    ) -> Result<Revision>;

    /// Requests an asynchronous generation run. Only acceptance is reported.
    async fn trigger_job(&self, job_id: &str, parameters: &JobParameters) -> Result<()>;

    /// Whether a credential is available for write-class operations.
    async fn has_credential(&self) -> bool;
}
