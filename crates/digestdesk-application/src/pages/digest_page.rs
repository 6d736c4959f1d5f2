//! Single digest page: paper cards with a save control each.

use std::sync::Arc;

use digestdesk_core::DeskError;
use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::error::Result;
use digestdesk_core::paper::Digest;

use super::{DigestQuery, require_credential};
use crate::favorites_store::{FavoritesStore, LoadOutcome};
use crate::renderer::{CardOptions, PaperCard, Renderer};

const NO_PAPERS_MESSAGE: &str = "No papers in this digest.";

/// Result of [`DigestPage::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

pub struct DigestPage {
    source: Arc<dyn DigestSource>,
    favorites: Arc<FavoritesStore>,
    renderer: Arc<Renderer>,
    digest: Option<Digest>,
}

impl DigestPage {
    pub fn new(
        source: Arc<dyn DigestSource>,
        favorites: Arc<FavoritesStore>,
        renderer: Arc<Renderer>,
    ) -> Self {
        Self {
            source,
            favorites,
            renderer,
            digest: None,
        }
    }

    /// Loads the favorites and the digest for `query` concurrently.
    ///
    /// A favorites failure only costs the saved markers; a digest failure
    /// is returned.
    pub async fn open(&mut self, query: &DigestQuery) -> Result<&Digest> {
        let (outcome, digest) = tokio::join!(
            self.favorites.load(),
            self.source.load_digest(query.date())
        );
        if let LoadOutcome::Failed(e) = &outcome {
            tracing::debug!("[DigestPage] Showing {} without favorites: {}", query.date(), e);
        }

        let digest = digest?;
        tracing::debug!(
            "[DigestPage] Opened {} with {} papers",
            digest.date,
            digest.papers.len()
        );
        Ok(self.digest.insert(digest))
    }

    pub fn digest(&self) -> Option<&Digest> {
        self.digest.as_ref()
    }

    /// Cards of the open digest with their saved state.
    pub async fn cards(&self) -> Vec<(PaperCard, CardOptions)> {
        let Some(digest) = &self.digest else {
            return Vec::new();
        };
        let mut cards = Vec::with_capacity(digest.papers.len());
        for paper in &digest.papers {
            let saved = self.favorites.has(&paper.arxiv_id).await;
            cards.push((PaperCard::from(paper), CardOptions::digest(saved)));
        }
        cards
    }

    pub async fn render(&self) -> Result<String> {
        let cards = self.cards().await;
        self.renderer.render_card_list(&cards, NO_PAPERS_MESSAGE)
    }

    /// Saves a paper of the open digest to the favorites.
    ///
    /// Checks the credential before anything else, so a missing token never
    /// reaches the network.
    pub async fn save(&self, arxiv_id: &str, note: &str) -> Result<SaveOutcome> {
        require_credential(&self.favorites).await?;

        let paper = self
            .digest
            .as_ref()
            .and_then(|digest| digest.find_paper(arxiv_id))
            .ok_or_else(|| DeskError::not_found("paper", arxiv_id))?;

        if self.favorites.add(paper, note).await? {
            tracing::info!("[DigestPage] Saved {}", arxiv_id);
            Ok(SaveOutcome::Saved)
        } else {
            Ok(SaveOutcome::AlreadySaved)
        }
    }
}
