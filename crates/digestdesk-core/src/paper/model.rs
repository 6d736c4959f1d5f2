//! Paper and digest models.

use serde::{Deserialize, Serialize};

/// A single recommended paper as it appears in a digest.
///
/// Identity is `arxiv_id`. Fields the generator adds beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub arxiv_id: String,
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub authors: Vec<String>,
    /// Relevance in `[0, 10]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_reason: Option<String>,
}

impl Paper {
    /// Coarse display tier of this paper's relevance score.
    pub fn score_tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.relevance_score)
    }
}

/// A published digest document (`digests/<date>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub date: String,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl Digest {
    /// Looks up a paper by its arXiv id.
    pub fn find_paper(&self, arxiv_id: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.arxiv_id == arxiv_id)
    }
}

/// One entry of `digests/index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestSummary {
    pub date: String,
    pub paper_count: usize,
}

/// Display tier derived from a relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
    None,
}

impl ScoreTier {
    /// `>= 8` high, `>= 6` medium, `>= 4` low, anything else (or no score) none.
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= 8.0 => ScoreTier::High,
            Some(s) if s >= 6.0 => ScoreTier::Medium,
            Some(s) if s >= 4.0 => ScoreTier::Low,
            _ => ScoreTier::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
            ScoreTier::None => "none",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(Some(8.0)), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(Some(10.0)), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(Some(7.99)), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(Some(6.0)), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(Some(4.0)), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(Some(3.9)), ScoreTier::None);
        assert_eq!(ScoreTier::from_score(None), ScoreTier::None);
    }

    #[test]
    fn test_digest_parses_generator_output() {
        let json = r#"{
            "date": "2024-01-01",
            "papers": [{
                "arxiv_id": "2401.00001",
                "title": "Agents",
                "link": "https://arxiv.org/abs/2401.00001",
                "authors": ["A. Author", "B. Author"],
                "abstract": "ignored",
                "relevance_score": 8.5,
                "relevance_reason": "matches interests"
            }]
        }"#;

        let digest: Digest = serde_json::from_str(json).unwrap();
        assert_eq!(digest.papers.len(), 1);
        let paper = digest.find_paper("2401.00001").unwrap();
        assert_eq!(paper.authors.len(), 2);
        assert_eq!(paper.score_tier(), ScoreTier::High);
        assert!(digest.find_paper("missing").is_none());
    }

    #[test]
    fn test_paper_without_score() {
        let json = r#"{"arxiv_id": "x", "title": "t", "link": "l"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert!(paper.authors.is_empty());
        assert_eq!(paper.score_tier(), ScoreTier::None);
    }
}
