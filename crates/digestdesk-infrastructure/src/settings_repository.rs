//! Settings repository implementation.
//!
//! Stores the access token and the last used generation inputs in
//! `settings.toml`, the local counterpart of browser storage.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;
use digestdesk_core::settings::{Settings, SettingsRepository};

use crate::paths::DeskPaths;
use crate::storage::AtomicTomlFile;

/// File-based settings repository.
pub struct FileSettingsRepository {
    file: AtomicTomlFile<Settings>,
}

impl FileSettingsRepository {
    /// Creates a repository at the default settings path.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = DeskPaths::new(base_path)
            .settings_file()
            .map_err(|e| DeskError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).private(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        Ok(self.file.load()?.unwrap_or_default())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let settings = settings.clone();
        self.file.update(move |current| *current = settings)?;
        tracing::debug!(
            "[SettingsRepository] Saved settings to {:?}",
            self.file.path()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestdesk_core::settings::GenerationParams;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(Some(temp_dir.path())).unwrap();

        let settings = repo.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(Some(temp_dir.path())).unwrap();

        let settings = Settings {
            credential: Some("ghp_token".to_string()),
            generation: GenerationParams {
                categories: "cs.DB".to_string(),
                interests: "query optimizers".to_string(),
            },
        };
        repo.save(&settings).await.unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(repo.path(), temp_dir.path().join("settings.toml"));
    }

    #[tokio::test]
    async fn test_clearing_credential_removes_it_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileSettingsRepository::new(Some(temp_dir.path())).unwrap();

        let mut settings = Settings {
            credential: Some("ghp_token".to_string()),
            ..Default::default()
        };
        repo.save(&settings).await.unwrap();
        settings.credential = None;
        repo.save(&settings).await.unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert!(!text.contains("ghp_token"));
    }
}
