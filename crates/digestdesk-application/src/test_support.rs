//! In-memory fakes shared by the application tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use digestdesk_core::DeskError;
use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::error::Result;
use digestdesk_core::paper::{Digest, DigestSummary, Paper};
use digestdesk_core::remote::{JobParameters, RemoteFile, RemoteStore, Revision};
use digestdesk_core::settings::{Settings, SettingsRepository};

pub fn paper(id: &str) -> Paper {
    Paper {
        arxiv_id: id.to_string(),
        title: format!("Paper {}", id),
        link: format!("https://arxiv.org/abs/{}", id),
        authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
        relevance_score: Some(8.5),
        relevance_reason: Some("Matches interests".to_string()),
    }
}

#[derive(Default)]
pub struct MemorySettings {
    settings: Mutex<Settings>,
}

impl MemorySettings {
    pub fn with_credential(token: &str) -> Self {
        Self {
            settings: Mutex::new(Settings {
                credential: Some(token.to_string()),
                ..Default::default()
            }),
        }
    }

    pub fn current(&self) -> Settings {
        self.settings.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.current())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

#[derive(Default)]
struct Counters {
    calls: usize,
    writes: usize,
    next_sha: usize,
}

/// Remote store keeping files in a map and checking revisions like GitHub.
///
/// The credential comes from a linked settings repository when present,
/// otherwise from a fixed flag.
#[derive(Default)]
pub struct MemoryRemoteStore {
    files: Mutex<HashMap<String, (Value, Revision)>>,
    counters: Mutex<Counters>,
    messages: Mutex<Vec<String>>,
    jobs: Mutex<Vec<(String, JobParameters)>>,
    fail_reads: Mutex<bool>,
    credential: bool,
    settings: Option<Arc<MemorySettings>>,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential() -> Self {
        Self {
            credential: true,
            ..Default::default()
        }
    }

    pub fn linked(settings: Arc<MemorySettings>) -> Self {
        Self {
            settings: Some(settings),
            ..Default::default()
        }
    }

    pub fn seed(&self, path: &str, content: Value) {
        let revision = self.next_revision();
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), (content, revision));
    }

    pub fn fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap() = fail;
    }

    /// Every call that would have reached the network.
    pub fn calls(&self) -> usize {
        self.counters.lock().unwrap().calls
    }

    /// Successful writes.
    pub fn writes(&self) -> usize {
        self.counters.lock().unwrap().writes
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }

    pub fn jobs(&self) -> Vec<(String, JobParameters)> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn content(&self, path: &str) -> Option<Value> {
        self.files.lock().unwrap().get(path).map(|(v, _)| v.clone())
    }

    fn next_revision(&self) -> Revision {
        let mut counters = self.counters.lock().unwrap();
        counters.next_sha += 1;
        Revision::new(format!("sha-{}", counters.next_sha))
    }

    fn count_call(&self) {
        self.counters.lock().unwrap().calls += 1;
    }

    fn credential_present(&self) -> bool {
        match &self.settings {
            Some(settings) => settings.current().has_credential(),
            None => self.credential,
        }
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn read_file(&self, path: &str) -> Result<Option<RemoteFile>> {
        self.count_call();
        if *self.fail_reads.lock().unwrap() {
            return Err(DeskError::transport("connection refused"));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(path)
            .map(|(content, revision)| RemoteFile {
                content: content.clone(),
                revision: revision.clone(),
            }))
    }

    async fn write_file(
        &self,
        path: &str,
        content: &Value,
        revision: Option<&Revision>,
        message: &str,
    ) -> Result<Revision> {
        if !self.credential_present() {
            return Err(DeskError::unauthenticated("no token"));
        }
        self.count_call();
        // Suspend like a network round trip so overlapping writes interleave.
        tokio::task::yield_now().await;

        let current = self
            .files
            .lock()
            .unwrap()
            .get(path)
            .map(|(_, r)| r.clone());
        if current.as_ref() != revision {
            return Err(DeskError::remote(
                409,
                format!("{} does not match", path),
            ));
        }

        let new_revision = self.next_revision();
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), (content.clone(), new_revision.clone()));
        self.counters.lock().unwrap().writes += 1;
        self.messages.lock().unwrap().push(message.to_string());
        Ok(new_revision)
    }

    async fn trigger_job(&self, job_id: &str, parameters: &JobParameters) -> Result<()> {
        if !self.credential_present() {
            return Err(DeskError::unauthenticated("no token"));
        }
        self.count_call();
        self.jobs
            .lock()
            .unwrap()
            .push((job_id.to_string(), parameters.clone()));
        Ok(())
    }

    async fn has_credential(&self) -> bool {
        self.credential_present()
    }
}

#[derive(Default)]
pub struct MemoryDigests {
    pub index: Vec<DigestSummary>,
    pub digests: Vec<Digest>,
}

impl MemoryDigests {
    pub fn single(date: &str, papers: Vec<Paper>) -> Self {
        Self {
            index: vec![DigestSummary {
                date: date.to_string(),
                paper_count: papers.len(),
            }],
            digests: vec![Digest {
                date: date.to_string(),
                papers,
            }],
        }
    }
}

#[async_trait]
impl DigestSource for MemoryDigests {
    async fn list_digests(&self) -> Vec<DigestSummary> {
        self.index.clone()
    }

    async fn load_digest(&self, date: &str) -> Result<Digest> {
        self.digests
            .iter()
            .find(|d| d.date == date)
            .cloned()
            .ok_or_else(|| DeskError::not_found("digest", date))
    }
}
