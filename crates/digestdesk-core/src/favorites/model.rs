//! Favorites document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paper::{Paper, ScoreTier};

/// Titles embedded in change messages are cut to this many characters.
pub const MAX_MESSAGE_TITLE_CHARS: usize = 50;

/// A saved paper. Same identity as [`Paper`], without the relevance reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePaper {
    pub arxiv_id: String,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub user_note: String,
    pub saved_at: DateTime<Utc>,
}

impl FavoritePaper {
    /// Normalizes a digest paper into a favorites record.
    pub fn from_paper(paper: &Paper, note: impl Into<String>, saved_at: DateTime<Utc>) -> Self {
        Self {
            arxiv_id: paper.arxiv_id.clone(),
            title: paper.title.clone(),
            link: paper.link.clone(),
            authors: paper.authors.clone(),
            relevance_score: paper.relevance_score,
            user_note: note.into(),
            saved_at,
        }
    }

    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.relevance_score)
    }
}

/// The favorites file content.
///
/// `arxiv_id` is unique within `papers`; the mutators below keep it so.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FavoritesDocument {
    #[serde(default)]
    pub papers: Vec<FavoritePaper>,
}

impl FavoritesDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, arxiv_id: &str) -> bool {
        self.papers.iter().any(|p| p.arxiv_id == arxiv_id)
    }

    pub fn get(&self, arxiv_id: &str) -> Option<&FavoritePaper> {
        self.papers.iter().find(|p| p.arxiv_id == arxiv_id)
    }

    /// Appends `paper` unless its id is already present.
    ///
    /// Returns `false` when nothing was added.
    pub fn insert(&mut self, paper: FavoritePaper) -> bool {
        if self.contains(&paper.arxiv_id) {
            return false;
        }
        self.papers.push(paper);
        true
    }

    /// Removes the record with `arxiv_id`, returning it.
    pub fn remove(&mut self, arxiv_id: &str) -> Option<FavoritePaper> {
        let index = self.papers.iter().position(|p| p.arxiv_id == arxiv_id)?;
        Some(self.papers.remove(index))
    }

    /// Overwrites the note of `arxiv_id`. Returns `false` if absent.
    pub fn set_note(&mut self, arxiv_id: &str, note: impl Into<String>) -> bool {
        match self.papers.iter_mut().find(|p| p.arxiv_id == arxiv_id) {
            Some(paper) => {
                paper.user_note = note.into();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

fn truncate_title(title: &str) -> String {
    title.chars().take(MAX_MESSAGE_TITLE_CHARS).collect()
}

/// Commit message for saving a paper.
pub fn add_message(title: &str) -> String {
    format!("Add favorite: {}", truncate_title(title))
}

/// Commit message for removing a paper.
pub fn remove_message(title: &str) -> String {
    format!("Remove favorite: {}", truncate_title(title))
}

/// Commit message for editing a note.
pub fn update_note_message(title: &str) -> String {
    format!("Update note: {}", truncate_title(title))
}
