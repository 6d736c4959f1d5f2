//! Digest reader over a local directory.
//!
//! Layout matches the deployed site: `index.json` plus one `<date>.json`
//! per digest.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use digestdesk_core::DeskError;
use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::error::Result;
use digestdesk_core::paper::{Digest, DigestSummary};

pub const INDEX_FILENAME: &str = "index.json";

/// Reads digests from a directory on disk.
pub struct FileDigestSource {
    dir: PathBuf,
}

impl FileDigestSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_index(&self) -> Result<Vec<DigestSummary>> {
        let content = fs::read_to_string(self.dir.join(INDEX_FILENAME)).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl DigestSource for FileDigestSource {
    async fn list_digests(&self) -> Vec<DigestSummary> {
        match self.read_index().await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(
                    "[FileDigestSource] Failed to read digest index in {:?}: {}",
                    self.dir,
                    e
                );
                Vec::new()
            }
        }
    }

    async fn load_digest(&self, date: &str) -> Result<Digest> {
        // Dates become file names; refuse anything that could leave the directory.
        if date.is_empty() || date.contains(['/', '\\']) || date.contains("..") {
            return Err(DeskError::not_found("digest", date));
        }

        let path = self.dir.join(format!("{}.json", date));
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DeskError::not_found("digest", date));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_digests_reads_index() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(INDEX_FILENAME),
            r#"[{"date": "2024-01-02", "paper_count": 5}, {"date": "2024-01-01", "paper_count": 3}]"#,
        )
        .unwrap();

        let source = FileDigestSource::new(temp_dir.path());
        let index = source.list_digests().await;
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].date, "2024-01-02");
        assert_eq!(index[1].paper_count, 3);
    }

    #[tokio::test]
    async fn test_list_digests_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileDigestSource::new(temp_dir.path());
        assert!(source.list_digests().await.is_empty());

        std::fs::write(temp_dir.path().join(INDEX_FILENAME), "not json").unwrap();
        assert!(source.list_digests().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_digest() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("2024-01-01.json"),
            r#"{"date": "2024-01-01", "papers": [{"arxiv_id": "1", "title": "t", "link": "l"}]}"#,
        )
        .unwrap();

        let source = FileDigestSource::new(temp_dir.path());
        let digest = source.load_digest("2024-01-01").await.unwrap();
        assert_eq!(digest.papers.len(), 1);

        let err = source.load_digest("2023-12-31").await.unwrap_err();
        assert!(err.is_not_found());

        let err = source.load_digest("../secrets").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
