//! Process-wide objects, built once from the configuration.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

use digestdesk_application::{DigestPage, FavoritesPage, FavoritesStore, ListPage, Renderer};
use digestdesk_core::config::{DigestLocation, SiteConfig};
use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::remote::RemoteStore;
use digestdesk_core::settings::SettingsRepository;
use digestdesk_infrastructure::{ConfigService, FileDigestSource, FileSettingsRepository};
use digestdesk_interaction::{GitHubClient, HttpDigestSource};

pub struct AppContext {
    pub site: SiteConfig,
    pub settings: Arc<dyn SettingsRepository>,
    pub remote: Arc<dyn RemoteStore>,
    pub favorites: Arc<FavoritesStore>,
    pub source: Arc<dyn DigestSource>,
    pub renderer: Arc<Renderer>,
}

impl AppContext {
    pub fn load(config: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let config_service = match config {
            Some(path) => ConfigService::with_path(path.to_path_buf()),
            None => ConfigService::new(config_dir)?,
        };
        let site = config_service
            .load()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

        let settings: Arc<dyn SettingsRepository> =
            Arc::new(FileSettingsRepository::new(config_dir)?);
        let remote: Arc<dyn RemoteStore> = Arc::new(GitHubClient::new(&site, settings.clone()));
        let favorites = Arc::new(FavoritesStore::new(
            remote.clone(),
            site.favorites_path.clone(),
        ));

        tracing::debug!(
            "[AppContext] Favorites at {}:{}, digests from {:?}",
            site.repository,
            site.favorites_path,
            site.digests
        );
        let source: Arc<dyn DigestSource> = match &site.digests {
            DigestLocation::Remote { base_url } => Arc::new(HttpDigestSource::new(base_url.clone())),
            DigestLocation::Local { dir } => Arc::new(FileDigestSource::new(dir.clone())),
        };

        Ok(Self {
            site,
            settings,
            remote,
            favorites,
            source,
            renderer: Arc::new(Renderer::new()?),
        })
    }

    pub fn list_page(&self) -> ListPage {
        ListPage::new(self.source.clone(), self.renderer.clone())
    }

    pub fn digest_page(&self) -> DigestPage {
        DigestPage::new(
            self.source.clone(),
            self.favorites.clone(),
            self.renderer.clone(),
        )
    }

    pub fn favorites_page(&self) -> FavoritesPage {
        FavoritesPage::new(
            self.favorites.clone(),
            self.settings.clone(),
            self.remote.clone(),
            self.site.workflow.clone(),
            self.renderer.clone(),
        )
    }
}
