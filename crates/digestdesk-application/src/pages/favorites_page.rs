//! Favorites page: saved papers, credential and generation settings.

use std::sync::Arc;

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;
use digestdesk_core::remote::{JobParameters, RemoteStore};
use digestdesk_core::settings::{
    CredentialStatus, GenerationParams, SettingsRepository, parse_categories,
};

use super::{NO_CREDENTIAL_MESSAGE, require_credential};
use crate::favorites_store::{FavoritesStore, LoadOutcome};
use crate::renderer::{CardOptions, PaperCard, Renderer};

pub const NO_FAVORITES_MESSAGE: &str = "No saved papers yet.";

pub struct FavoritesPage {
    favorites: Arc<FavoritesStore>,
    settings: Arc<dyn SettingsRepository>,
    remote: Arc<dyn RemoteStore>,
    workflow: String,
    renderer: Arc<Renderer>,
}

impl FavoritesPage {
    pub fn new(
        favorites: Arc<FavoritesStore>,
        settings: Arc<dyn SettingsRepository>,
        remote: Arc<dyn RemoteStore>,
        workflow: impl Into<String>,
        renderer: Arc<Renderer>,
    ) -> Self {
        Self {
            favorites,
            settings,
            remote,
            workflow: workflow.into(),
            renderer,
        }
    }

    /// Stores `token` in the settings file. Blank input is rejected.
    pub async fn store_credential(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DeskError::validation("Please enter a token"));
        }

        let mut settings = self.settings.load().await?;
        settings.credential = Some(token.to_string());
        self.settings.save(&settings).await?;
        tracing::info!("[FavoritesPage] Token saved");
        Ok(())
    }

    pub async fn clear_credential(&self) -> Result<()> {
        let mut settings = self.settings.load().await?;
        settings.credential = None;
        self.settings.save(&settings).await?;
        tracing::info!("[FavoritesPage] Token cleared");
        Ok(())
    }

    /// Whether a token is available and where it comes from. The token
    /// itself is never returned.
    ///
    /// A stored token wins; otherwise the remote store is asked, which also
    /// sees credentials supplied by the environment.
    pub async fn credential_status(&self) -> Result<CredentialStatus> {
        let status = self.settings.load().await?.credential_status();
        if !status.configured() && self.remote.has_credential().await {
            return Ok(CredentialStatus::from_environment());
        }
        Ok(status)
    }

    /// Last used generation inputs, or the defaults.
    pub async fn generation_params(&self) -> Result<GenerationParams> {
        Ok(self.settings.load().await?.generation)
    }

    /// Starts the digest generation job.
    ///
    /// Needs at least one category and a credential. The inputs are
    /// remembered before the job is triggered; the categories are sent
    /// comma-joined without blanks.
    pub async fn trigger_generation(
        &self,
        categories: &str,
        interests: &str,
    ) -> Result<JobParameters> {
        let parsed = parse_categories(categories);
        if parsed.is_empty() {
            return Err(DeskError::validation("Please enter at least one category"));
        }
        if !self.remote.has_credential().await {
            return Err(DeskError::unauthenticated(NO_CREDENTIAL_MESSAGE));
        }

        let mut settings = self.settings.load().await?;
        settings.generation = GenerationParams {
            categories: categories.trim().to_string(),
            interests: interests.trim().to_string(),
        };
        self.settings.save(&settings).await?;

        let parameters = JobParameters {
            categories: parsed.join(","),
            interests: interests.trim().to_string(),
        };
        self.remote.trigger_job(&self.workflow, &parameters).await?;
        tracing::info!(
            "[FavoritesPage] Generation started for {}",
            parameters.categories
        );
        Ok(parameters)
    }

    pub async fn open(&self) -> LoadOutcome {
        self.favorites.load().await
    }

    pub async fn cards(&self) -> Vec<(PaperCard, CardOptions)> {
        self.favorites
            .papers()
            .await
            .iter()
            .map(|paper| (PaperCard::from(paper), CardOptions::favorite()))
            .collect()
    }

    pub async fn render(&self) -> Result<String> {
        let cards = self.cards().await;
        self.renderer.render_card_list(&cards, NO_FAVORITES_MESSAGE)
    }

    /// Removes a saved paper. `Ok(false)` when it was not saved.
    pub async fn remove(&self, arxiv_id: &str) -> Result<bool> {
        require_credential(&self.favorites).await?;
        self.favorites.remove(arxiv_id).await
    }

    /// Replaces the note of a saved paper. `Ok(false)` when it was not saved.
    pub async fn update_note(&self, arxiv_id: &str, note: &str) -> Result<bool> {
        require_credential(&self.favorites).await?;
        self.favorites.update_note(arxiv_id, note).await
    }
}
