//! Site configuration models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";
pub const DEFAULT_WORKFLOW: &str = "generate-digest.yml";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_DIGESTS_DIR: &str = "digests";

/// Owner and name of the hosting repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses `owner/repo`.
    pub fn parse(slug: &str) -> Option<Self> {
        let (owner, repo) = slug.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl std::fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Where published digests are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DigestLocation {
    /// Deployed static site; files live under `<base_url>/digests/`.
    Remote { base_url: String },
    /// Local directory holding `index.json` and `<date>.json`.
    Local { dir: PathBuf },
}

impl Default for DigestLocation {
    fn default() -> Self {
        DigestLocation::Local {
            dir: PathBuf::from(DEFAULT_DIGESTS_DIR),
        }
    }
}

/// Fully resolved configuration shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub repository: RepoCoordinates,
    pub branch: String,
    pub favorites_path: String,
    /// Workflow file name or id of the generation job.
    pub workflow: String,
    pub api_base_url: String,
    pub digests: DigestLocation,
}

impl SiteConfig {
    /// Configuration with every optional value at its default.
    pub fn new(repository: RepoCoordinates) -> Self {
        Self {
            repository,
            branch: DEFAULT_BRANCH.to_string(),
            favorites_path: DEFAULT_FAVORITES_PATH.to_string(),
            workflow: DEFAULT_WORKFLOW.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            digests: DigestLocation::default(),
        }
    }
}
