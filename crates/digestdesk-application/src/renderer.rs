//! HTML fragments for paper cards and the digest list.
//!
//! Every interpolated value is HTML-escaped by the template environment.
//! View models carry pre-formatted strings so templates stay free of logic
//! beyond conditionals and loops.

use minijinja::{AutoEscape, Environment, context};
use serde::Serialize;

use digestdesk_core::DeskError;
use digestdesk_core::error::Result;
use digestdesk_core::favorites::FavoritePaper;
use digestdesk_core::paper::{DigestSummary, Paper, ScoreTier};

const CARD: &str = "card.html";
const CARD_LIST: &str = "card_list.html";
const DIGEST_LIST: &str = "digest_list.html";

pub const NO_DIGESTS_MESSAGE: &str = "No digests available yet.";

/// Display data of one paper card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaperCard {
    pub arxiv_id: String,
    pub title: String,
    pub link: String,
    /// Comma separated author names; empty when unknown.
    pub authors: String,
    /// Score with one decimal, e.g. `8.5`.
    pub score_label: Option<String>,
    pub tier: ScoreTier,
    pub reason: Option<String>,
    pub note: Option<String>,
    /// `YYYY-MM-DD` of saving, favorites only.
    pub saved_at: Option<String>,
}

impl From<&Paper> for PaperCard {
    fn from(paper: &Paper) -> Self {
        Self {
            arxiv_id: paper.arxiv_id.clone(),
            title: paper.title.clone(),
            link: safe_link(&paper.link),
            authors: paper.authors.join(", "),
            score_label: paper.relevance_score.map(score_label),
            tier: paper.score_tier(),
            reason: paper.relevance_reason.clone(),
            note: None,
            saved_at: None,
        }
    }
}

impl From<&FavoritePaper> for PaperCard {
    fn from(paper: &FavoritePaper) -> Self {
        Self {
            arxiv_id: paper.arxiv_id.clone(),
            title: paper.title.clone(),
            link: safe_link(&paper.link),
            authors: paper.authors.join(", "),
            score_label: paper.relevance_score.map(score_label),
            tier: paper.score_tier(),
            reason: None,
            note: Some(paper.user_note.clone()).filter(|n| !n.trim().is_empty()),
            saved_at: Some(paper.saved_at.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Links outside http(s) are replaced by `#` so a card never carries a
/// `javascript:` or `data:` href.
fn safe_link(link: &str) -> String {
    let lower = link.trim().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        link.trim().to_string()
    } else {
        "#".to_string()
    }
}

fn score_label(score: f64) -> String {
    format!("{:.1}", score)
}

/// Which controls a card shows.
///
/// With `show_save`, exactly one save control is rendered: a `Save` button
/// while unsaved, a static `Saved` indicator once saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CardOptions {
    pub show_save: bool,
    pub show_remove: bool,
    pub show_edit_note: bool,
    pub saved: bool,
}

impl CardOptions {
    /// Options for a card on a digest page.
    pub fn digest(saved: bool) -> Self {
        Self {
            show_save: true,
            saved,
            ..Default::default()
        }
    }

    /// Options for a card on the favorites page.
    pub fn favorite() -> Self {
        Self {
            show_remove: true,
            show_edit_note: true,
            ..Default::default()
        }
    }
}

/// One row of the digest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestEntry {
    pub date: String,
    pub href: String,
    pub count_label: String,
}

impl From<&DigestSummary> for DigestEntry {
    fn from(summary: &DigestSummary) -> Self {
        let count_label = if summary.paper_count == 1 {
            "1 paper".to_string()
        } else {
            format!("{} papers", summary.paper_count)
        };
        Self {
            date: summary.date.clone(),
            href: format!("digest.html?date={}", summary.date),
            count_label,
        }
    }
}

#[derive(Serialize)]
struct CardItem<'a> {
    card: &'a PaperCard,
    options: &'a CardOptions,
}

/// Template environment for the page fragments.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(CARD, include_str!("../templates/card.html"))
            .map_err(template_error)?;
        env.add_template(CARD_LIST, include_str!("../templates/card_list.html"))
            .map_err(template_error)?;
        env.add_template(DIGEST_LIST, include_str!("../templates/digest_list.html"))
            .map_err(template_error)?;
        Ok(Self { env })
    }

    pub fn render_card(&self, card: &PaperCard, options: &CardOptions) -> Result<String> {
        self.render(CARD, context! { card => card, options => options })
    }

    /// Renders `cards` in order, or `empty_message` when there are none.
    pub fn render_card_list(
        &self,
        cards: &[(PaperCard, CardOptions)],
        empty_message: &str,
    ) -> Result<String> {
        let items: Vec<CardItem<'_>> = cards
            .iter()
            .map(|(card, options)| CardItem { card, options })
            .collect();
        self.render(
            CARD_LIST,
            context! { items => items, empty_message => empty_message },
        )
    }

    pub fn render_digest_list(&self, entries: &[DigestEntry]) -> Result<String> {
        self.render(
            DIGEST_LIST,
            context! { entries => entries, empty_message => NO_DIGESTS_MESSAGE },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .map_err(template_error)
    }
}

fn template_error(e: minijinja::Error) -> DeskError {
    DeskError::internal(format!("template error: {}", e))
}
