//! Digest index page.

use std::sync::Arc;

use digestdesk_core::digest_source::DigestSource;
use digestdesk_core::error::Result;

use crate::renderer::{DigestEntry, Renderer};

pub struct ListPage {
    source: Arc<dyn DigestSource>,
    renderer: Arc<Renderer>,
}

impl ListPage {
    pub fn new(source: Arc<dyn DigestSource>, renderer: Arc<Renderer>) -> Self {
        Self { source, renderer }
    }

    /// Index entries in index order. An unreadable index yields none.
    pub async fn entries(&self) -> Vec<DigestEntry> {
        self.source
            .list_digests()
            .await
            .iter()
            .map(DigestEntry::from)
            .collect()
    }

    pub async fn render(&self) -> Result<String> {
        let entries = self.entries().await;
        self.renderer.render_digest_list(&entries)
    }
}
