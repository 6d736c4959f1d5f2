use anyhow::Result;
use colored::Colorize;

use digestdesk_application::renderer::NO_DIGESTS_MESSAGE;
use digestdesk_application::{DigestQuery, SaveOutcome};

use super::context::AppContext;
use super::display::print_cards;
use super::prompt::prompt;

pub async fn list(ctx: &AppContext, html: bool) -> Result<()> {
    let page = ctx.list_page();
    if html {
        println!("{}", page.render().await?);
        return Ok(());
    }

    let entries = page.entries().await;
    if entries.is_empty() {
        println!("{}", NO_DIGESTS_MESSAGE.bright_black());
        return Ok(());
    }
    for entry in entries {
        println!("{}  {}", entry.date.bold(), entry.count_label.bright_black());
    }
    Ok(())
}

/// `target` is either a bare date or a query string.
fn parse_target(target: &str) -> Result<DigestQuery> {
    let query = if target.contains('=') {
        DigestQuery::parse(target)?
    } else {
        DigestQuery::from_date(target)?
    };
    Ok(query)
}

pub async fn show(ctx: &AppContext, target: &str, html: bool) -> Result<()> {
    let query = parse_target(target)?;
    let mut page = ctx.digest_page();
    let digest = page.open(&query).await?;

    if html {
        println!("{}", page.render().await?);
        return Ok(());
    }

    println!(
        "{}\n",
        format!("Digest {} ({} papers)", digest.date, digest.papers.len())
            .bright_magenta()
            .bold()
    );
    let cards = page.cards().await;
    print_cards(&cards, "No papers in this digest.");
    Ok(())
}

pub async fn save(
    ctx: &AppContext,
    date: &str,
    arxiv_id: &str,
    note: Option<String>,
) -> Result<()> {
    let query = DigestQuery::from_date(date)?;
    let mut page = ctx.digest_page();
    page.open(&query).await?;

    // Only ask for a note when the save can go through.
    let note = match note {
        Some(note) => note,
        None if ctx.favorites.can_persist().await => {
            prompt("Note (optional): ", "")?.unwrap_or_default()
        }
        None => String::new(),
    };

    match page.save(arxiv_id, note.trim()).await? {
        SaveOutcome::Saved => println!("{}", format!("Saved {}", arxiv_id).bright_green()),
        SaveOutcome::AlreadySaved => {
            println!("{}", format!("{} is already saved", arxiv_id).bright_black())
        }
    }
    Ok(())
}
