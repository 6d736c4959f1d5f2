//! Favorites store: in-memory mirror of the remote favorites document.
//!
//! Constructed once per process and shared by reference. Every mutation is
//! applied to the in-memory document first and then persisted with the
//! revision captured at mutation time. The lock is released before network
//! I/O, so overlapping mutations can capture the same revision; the remote
//! store then rejects the later write as stale. That rejection is reported,
//! never retried or merged.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;
use digestdesk_core::favorites::{
    FavoritePaper, FavoritesDocument, add_message, remove_message, update_note_message,
};
use digestdesk_core::paper::Paper;
use digestdesk_core::remote::{RemoteStore, Revision};

/// Result of [`FavoritesStore::load`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Remote document loaded; carries the number of papers.
    Loaded(usize),
    /// No favorites file exists yet; the store is empty.
    Absent,
    /// Loading failed; in-memory state was left as it was.
    Failed(DeskError),
}

impl LoadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

#[derive(Debug, Default)]
struct FavoritesState {
    document: FavoritesDocument,
    revision: Option<Revision>,
}

/// Store for the favorites document at `path` in the remote repository.
pub struct FavoritesStore {
    remote: Arc<dyn RemoteStore>,
    path: String,
    state: RwLock<FavoritesState>,
}

impl FavoritesStore {
    pub fn new(remote: Arc<dyn RemoteStore>, path: impl Into<String>) -> Self {
        Self {
            remote,
            path: path.into(),
            state: RwLock::new(FavoritesState::default()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reloads the document from the remote store.
    ///
    /// Failures are logged and returned as [`LoadOutcome::Failed`]; callers
    /// continue with whatever is in memory.
    pub async fn load(&self) -> LoadOutcome {
        let file = match self.remote.read_file(&self.path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("[FavoritesStore] Failed to load {}: {}", self.path, e);
                return LoadOutcome::Failed(e);
            }
        };

        let Some(file) = file else {
            let mut state = self.state.write().await;
            state.document = FavoritesDocument::new();
            state.revision = None;
            tracing::debug!("[FavoritesStore] {} does not exist yet", self.path);
            return LoadOutcome::Absent;
        };

        let document: FavoritesDocument = match serde_json::from_value(file.content) {
            Ok(document) => document,
            Err(e) => {
                let e = DeskError::from(e);
                tracing::warn!("[FavoritesStore] Malformed {}: {}", self.path, e);
                return LoadOutcome::Failed(e);
            }
        };

        let count = document.len();
        let mut state = self.state.write().await;
        state.document = document;
        state.revision = Some(file.revision);
        tracing::debug!("[FavoritesStore] Loaded {} favorites", count);
        LoadOutcome::Loaded(count)
    }

    /// Membership test by arXiv id.
    pub async fn has(&self, arxiv_id: &str) -> bool {
        self.state.read().await.document.contains(arxiv_id)
    }

    /// Snapshot of the saved papers.
    pub async fn papers(&self) -> Vec<FavoritePaper> {
        self.state.read().await.document.papers.clone()
    }

    pub async fn get(&self, arxiv_id: &str) -> Option<FavoritePaper> {
        self.state.read().await.document.get(arxiv_id).cloned()
    }

    /// Revision of the last successful read or write.
    pub async fn revision(&self) -> Option<Revision> {
        self.state.read().await.revision.clone()
    }

    /// Whether the remote store would accept a write (credential present).
    pub async fn can_persist(&self) -> bool {
        self.remote.has_credential().await
    }

    /// Saves `paper` with `note`.
    ///
    /// Returns `Ok(false)` without writing when the paper is already saved.
    pub async fn add(&self, paper: &Paper, note: &str) -> Result<bool> {
        let (document, revision) = {
            let mut state = self.state.write().await;
            let record = FavoritePaper::from_paper(paper, note, Utc::now());
            if !state.document.insert(record) {
                return Ok(false);
            }
            (state.document.clone(), state.revision.clone())
        };

        self.persist(&document, revision, &add_message(&paper.title))
            .await?;
        Ok(true)
    }

    /// Drops the paper with `arxiv_id`. Returns `Ok(false)` without writing
    /// when it is not saved.
    pub async fn remove(&self, arxiv_id: &str) -> Result<bool> {
        let (document, revision, removed) = {
            let mut state = self.state.write().await;
            let Some(removed) = state.document.remove(arxiv_id) else {
                return Ok(false);
            };
            (state.document.clone(), state.revision.clone(), removed)
        };

        self.persist(&document, revision, &remove_message(&removed.title))
            .await?;
        Ok(true)
    }

    /// Replaces the note of `arxiv_id`. Returns `Ok(false)` without writing
    /// when it is not saved.
    pub async fn update_note(&self, arxiv_id: &str, note: &str) -> Result<bool> {
        let (document, revision, title) = {
            let mut state = self.state.write().await;
            if !state.document.set_note(arxiv_id, note) {
                return Ok(false);
            }
            let title = state
                .document
                .get(arxiv_id)
                .map(|p| p.title.clone())
                .unwrap_or_default();
            (state.document.clone(), state.revision.clone(), title)
        };

        self.persist(&document, revision, &update_note_message(&title))
            .await?;
        Ok(true)
    }

    /// Writes `document` and records the new revision.
    ///
    /// On failure the in-memory document keeps the attempted change and the
    /// revision is left untouched; reconciling is the caller's job (reload).
    async fn persist(
        &self,
        document: &FavoritesDocument,
        revision: Option<Revision>,
        message: &str,
    ) -> Result<()> {
        let content = serde_json::to_value(document)?;
        let new_revision = self
            .remote
            .write_file(&self.path, &content, revision.as_ref(), message)
            .await
            .inspect_err(|e| {
                tracing::warn!("[FavoritesStore] Failed to save {}: {}", self.path, e);
            })?;

        self.state.write().await.revision = Some(new_revision);
        Ok(())
    }
}
