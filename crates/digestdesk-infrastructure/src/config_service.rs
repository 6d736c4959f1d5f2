//! Configuration service implementation.
//!
//! Loads `config.toml` and resolves it into a [`SiteConfig`]. Repository
//! coordinates missing from the file are detected from the environment or
//! the git checkout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use digestdesk_core::DeskError;
use digestdesk_core::config::{
    DEFAULT_API_BASE_URL, DEFAULT_BRANCH, DEFAULT_DIGESTS_DIR, DEFAULT_FAVORITES_PATH,
    DEFAULT_WORKFLOW, DigestLocation, RepoCoordinates, SiteConfig,
};
use digestdesk_core::error::Result;

use crate::paths::DeskPaths;
use crate::repo_info::detect_repository;
use crate::storage::AtomicTomlFile;

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub favorites_path: Option<String>,
    pub workflow: Option<String>,
    pub api_base_url: Option<String>,
    /// Base URL of the deployed site. When set, digests are fetched over HTTP.
    pub site_url: Option<String>,
    pub digests_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Resolves into a [`SiteConfig`], calling `detect` only when the file
    /// does not name the repository.
    pub fn resolve_with<F>(self, detect: F) -> Result<SiteConfig>
    where
        F: FnOnce() -> Option<RepoCoordinates>,
    {
        let repository = match (self.owner, self.repo) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
                RepoCoordinates::new(owner, repo)
            }
            _ => detect().ok_or_else(|| {
                DeskError::config(
                    "repository not configured: set owner and repo in config.toml, \
                     GITHUB_REPOSITORY, or run inside a GitHub checkout",
                )
            })?,
        };

        let digests = match self.site_url {
            Some(base_url) => DigestLocation::Remote {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            None => DigestLocation::Local {
                dir: self
                    .digests_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DIGESTS_DIR)),
            },
        };

        Ok(SiteConfig {
            repository,
            branch: self.branch.unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            favorites_path: self
                .favorites_path
                .unwrap_or_else(|| DEFAULT_FAVORITES_PATH.to_string()),
            workflow: self.workflow.unwrap_or_else(|| DEFAULT_WORKFLOW.to_string()),
            api_base_url: self
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            digests,
        })
    }
}

/// Loads the site configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses `config.toml` under the default (or given) config directory.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = DeskPaths::new(base_path)
            .config_file()
            .map_err(|e| DeskError::config(e.to_string()))?;
        Ok(Self { path })
    }

    /// Uses an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file. A missing file yields all defaults.
    pub fn load_file(&self) -> Result<ConfigFile> {
        let file = AtomicTomlFile::<ConfigFile>::new(self.path.clone());
        let loaded = file.load()?;
        if loaded.is_none() {
            tracing::debug!("[ConfigService] No config at {:?}, using defaults", self.path);
        }
        Ok(loaded.unwrap_or_default())
    }

    /// Loads and resolves the site configuration.
    pub fn load(&self) -> Result<SiteConfig> {
        let config = self.load_file()?.resolve_with(detect_repository)?;
        tracing::info!(
            "[ConfigService] Repository {} (branch {})",
            config.repository,
            config.branch
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_values_win_over_detection() {
        let file = ConfigFile {
            owner: Some("octo".to_string()),
            repo: Some("papers".to_string()),
            branch: Some("gh-pages".to_string()),
            site_url: Some("https://octo.github.io/papers/".to_string()),
            ..Default::default()
        };

        let config = file
            .resolve_with(|| -> Option<RepoCoordinates> { panic!("detection must not run") })
            .unwrap();
        assert_eq!(config.repository, RepoCoordinates::new("octo", "papers"));
        assert_eq!(config.branch, "gh-pages");
        assert_eq!(config.favorites_path, DEFAULT_FAVORITES_PATH);
        assert_eq!(
            config.digests,
            DigestLocation::Remote {
                base_url: "https://octo.github.io/papers".to_string()
            }
        );
    }

    #[test]
    fn test_detection_fallback() {
        let config = ConfigFile::default()
            .resolve_with(|| Some(RepoCoordinates::new("a", "b")))
            .unwrap();
        assert_eq!(config.repository.to_string(), "a/b");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.digests, DigestLocation::default());
    }

    #[test]
    fn test_unresolved_repository_is_config_error() {
        let err = ConfigFile::default().resolve_with(|| None).unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }

    #[test]
    fn test_load_file_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "owner = \"octo\"\nrepo = \"papers\"\ndigests_dir = \"site/digests\"\n",
        )
        .unwrap();

        let service = ConfigService::new(Some(temp_dir.path())).unwrap();
        let file = service.load_file().unwrap();
        assert_eq!(file.owner.as_deref(), Some("octo"));
        assert_eq!(file.digests_dir, Some(PathBuf::from("site/digests")));
    }
}
