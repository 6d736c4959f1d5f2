//! Repository owner/name discovery.
//!
//! Order: `GITHUB_REPOSITORY` (set on CI runners), then the `origin` remote
//! of the current git checkout.

use digestdesk_core::config::RepoCoordinates;
use std::env;
use std::process::Command;

pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Detects the repository from the environment or git.
pub fn detect_repository() -> Option<RepoCoordinates> {
    if let Some(coords) = env::var(GITHUB_REPOSITORY_ENV)
        .ok()
        .and_then(|slug| RepoCoordinates::parse(&slug))
    {
        tracing::debug!("[RepoInfo] Using {} = {}", GITHUB_REPOSITORY_ENV, coords);
        return Some(coords);
    }

    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;
    if !output.status.success() {
        tracing::debug!("[RepoInfo] `git remote get-url origin` failed");
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout);
    let coords = parse_github_remote(url.trim());
    if let Some(coords) = &coords {
        tracing::debug!("[RepoInfo] Using origin remote: {}", coords);
    }
    coords
}

/// Extracts owner/repo from a GitHub remote URL.
///
/// Accepts `git@github.com:owner/repo.git` and
/// `https://github.com/owner/repo(.git)`.
pub fn parse_github_remote(url: &str) -> Option<RepoCoordinates> {
    if !url.contains("github.com") {
        return None;
    }

    let path = if url.starts_with("git@") {
        url.rsplit(':').next()?
    } else {
        url.split("github.com/").nth(1)?
    };

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let mut parts = path.split('/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts.next().filter(|s| !s.is_empty())?;
    Some(RepoCoordinates::new(owner, repo))
}
