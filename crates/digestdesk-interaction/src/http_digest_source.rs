//! Digest reader over HTTP (the deployed static site).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use digestdesk_core::DeskError;
use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::error::Result;
use digestdesk_core::paper::{Digest, DigestSummary};

/// Fetches `digests/index.json` and `digests/<date>.json` from a base URL.
#[derive(Clone)]
pub struct HttpDigestSource {
    client: Client,
    base_url: String,
}

impl HttpDigestSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, file: &str) -> String {
        format!("{}/digests/{}", self.base_url, file)
    }

    async fn fetch_index(&self) -> Result<Vec<DigestSummary>> {
        let url = self.url("index.json");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DeskError::transport(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeskError::remote(
                status.as_u16(),
                format!("Failed to load digest index: {}", status.as_u16()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DeskError::transport(format!("Invalid digest index: {}", e)))
    }
}

#[async_trait]
impl DigestSource for HttpDigestSource {
    async fn list_digests(&self) -> Vec<DigestSummary> {
        match self.fetch_index().await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("[HttpDigestSource] {}", e);
                Vec::new()
            }
        }
    }

    async fn load_digest(&self, date: &str) -> Result<Digest> {
        let url = self.url(&format!("{}.json", date));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DeskError::transport(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DeskError::not_found("digest", date));
        }
        if !status.is_success() {
            return Err(DeskError::remote(
                status.as_u16(),
                format!("Failed to load digest {}: {}", date, status.as_u16()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DeskError::transport(format!("Invalid digest {}: {}", date, e)))
    }
}
