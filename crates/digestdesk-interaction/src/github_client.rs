//! GitHubClient - remote store backed by the GitHub REST API.
//!
//! Files are read and written through the contents API; the generation job
//! is a `workflow_dispatch` event. Credential priority: settings file, then
//! the `GITHUB_TOKEN` environment variable.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;

use digestdesk_core::DeskError;
use digestdesk_core::config::{RepoCoordinates, SiteConfig};
use digestdesk_core::error::Result;
use digestdesk_core::remote::{JobParameters, RemoteFile, RemoteStore, Revision};
use digestdesk_core::settings::SettingsRepository;

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("digestdesk/", env!("CARGO_PKG_VERSION"));
const NO_CREDENTIAL: &str =
    "no GitHub token configured; set one with `digestdesk token set` or GITHUB_TOKEN";

/// Remote store client talking to GitHub.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_base_url: String,
    repository: RepoCoordinates,
    branch: String,
    settings: Arc<dyn SettingsRepository>,
    env_fallback: bool,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    content: ContentRef,
}

#[derive(Debug, Deserialize)]
struct ContentRef {
    sha: String,
}

#[derive(Debug, Serialize)]
struct DispatchRequest<'a> {
    r#ref: &'a str,
    inputs: &'a JobParameters,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GitHubClient {
    /// Creates a client for the repository in `config`.
    pub fn new(config: &SiteConfig, settings: Arc<dyn SettingsRepository>) -> Self {
        Self {
            client: Client::new(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            repository: config.repository.clone(),
            branch: config.branch.clone(),
            settings,
            env_fallback: true,
        }
    }

    /// Enables or disables the `GITHUB_TOKEN` fallback.
    pub fn with_env_fallback(mut self, enabled: bool) -> Self {
        self.env_fallback = enabled;
        self
    }

    /// Resolves the credential. The value is never logged.
    async fn credential(&self) -> Option<String> {
        match self.settings.load().await {
            Ok(settings) => {
                if let Some(token) = settings.credential() {
                    return Some(token.to_string());
                }
            }
            Err(e) => {
                tracing::warn!("[GitHubClient] Failed to load settings: {}", e);
            }
        }

        if self.env_fallback {
            env::var(GITHUB_TOKEN_ENV)
                .ok()
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
        } else {
            None
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base_url,
            self.repository.owner,
            self.repository.repo,
            path.trim_start_matches('/')
        )
    }

    fn dispatch_url(&self, job_id: &str) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.api_base_url, self.repository.owner, self.repository.repo, job_id
        )
    }

    fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .header("X-GitHub-Api-Version", API_VERSION);
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(request: RequestBuilder, url: &str) -> Result<Response> {
        request
            .send()
            .await
            .map_err(|e| DeskError::transport(format!("Request to {} failed: {}", url, e)))
    }

    /// Turns a non-success response into `DeskError::Remote`.
    async fn error_from_response(response: Response) -> DeskError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        DeskError::remote(status.as_u16(), server_message(status, &body))
    }
}

/// Server-supplied `message`, or a generic status message.
pub(crate) fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("GitHub API error: {}", status.as_u16()))
}

/// Serializes `value` as pretty JSON wrapped in base64.
pub(crate) fn encode_content(value: &serde_json::Value) -> Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(BASE64_STANDARD.encode(json.as_bytes()))
}

/// Decodes the contents API envelope (base64 with embedded line breaks).
pub(crate) fn decode_content(encoded: &str) -> Result<serde_json::Value> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64_STANDARD.decode(compact.as_bytes())?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl RemoteStore for GitHubClient {
    async fn read_file(&self, path: &str) -> Result<Option<RemoteFile>> {
        let url = self.contents_url(path);
        let token = self.credential().await;
        let request = self
            .request(Method::GET, &url, token.as_deref())
            .query(&[("ref", self.branch.as_str())]);

        let response = Self::send(request, &url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!("[GitHubClient] {} does not exist yet", path);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: ContentsResponse = response
            .json()
            .await
            .map_err(|e| DeskError::transport(format!("Invalid contents response: {}", e)))?;
        let content = decode_content(&body.content)?;

        tracing::debug!("[GitHubClient] Read {} at {}", path, body.sha);
        Ok(Some(RemoteFile {
            content,
            revision: Revision::new(body.sha),
        }))
    }

    async fn write_file(
        &self,
        path: &str,
        content: &serde_json::Value,
        revision: Option<&Revision>,
        message: &str,
    ) -> Result<Revision> {
        let token = self
            .credential()
            .await
            .ok_or_else(|| DeskError::unauthenticated(NO_CREDENTIAL))?;

        let url = self.contents_url(path);
        let body = PutContentsRequest {
            message,
            content: encode_content(content)?,
            branch: &self.branch,
            sha: revision.map(Revision::as_str),
        };

        let request = self.request(Method::PUT, &url, Some(&token)).json(&body);
        let response = Self::send(request, &url).await?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            tracing::warn!("[GitHubClient] Write of {} rejected: {}", path, err);
            return Err(err);
        }

        let body: PutContentsResponse = response
            .json()
            .await
            .map_err(|e| DeskError::transport(format!("Invalid contents response: {}", e)))?;

        tracing::info!("[GitHubClient] Wrote {} ({})", path, message);
        Ok(Revision::new(body.content.sha))
    }

    async fn trigger_job(&self, job_id: &str, parameters: &JobParameters) -> Result<()> {
        let token = self
            .credential()
            .await
            .ok_or_else(|| DeskError::unauthenticated(NO_CREDENTIAL))?;

        let url = self.dispatch_url(job_id);
        let body = DispatchRequest {
            r#ref: &self.branch,
            inputs: parameters,
        };

        let request = self.request(Method::POST, &url, Some(&token)).json(&body);
        let response = Self::send(request, &url).await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        tracing::info!("[GitHubClient] Dispatched workflow {}", job_id);
        Ok(())
    }

    async fn has_credential(&self) -> bool {
        self.credential().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_then_decode_with_line_breaks() {
        let value = json!({"papers": [{"arxiv_id": "2401.00001", "title": "Émergence"}]});
        let encoded = encode_content(&value).unwrap();

        // The contents API wraps base64 at 60 columns.
        let wrapped: String = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| format!("{}\n", String::from_utf8_lossy(chunk)))
            .collect();

        assert_eq!(decode_content(&wrapped).unwrap(), value);
    }

    #[test]
    fn test_encoded_content_is_pretty_json() {
        let encoded = encode_content(&json!({"papers": []})).unwrap();
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "{\n  \"papers\": []\n}");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_content("%%%").is_err());
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(StatusCode::CONFLICT, r#"{"message": "is at abc but expected def"}"#),
            "is at abc but expected def"
        );
        assert_eq!(
            server_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "GitHub API error: 502"
        );
    }

    #[test]
    fn test_dispatch_body_uses_ref_key() {
        let params = JobParameters {
            categories: "cs.AI".to_string(),
            interests: "agents".to_string(),
        };
        let body = DispatchRequest {
            r#ref: "main",
            inputs: &params,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ref": "main", "inputs": {"categories": "cs.AI", "interests": "agents"}})
        );
    }
}
