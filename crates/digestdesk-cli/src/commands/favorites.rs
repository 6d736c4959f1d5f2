use anyhow::Result;
use colored::Colorize;

use digestdesk_application::LoadOutcome;
use digestdesk_application::pages::{FavoritesPage, NO_FAVORITES_MESSAGE};

use super::context::AppContext;
use super::display::print_cards;
use super::prompt::{confirm, prompt};

/// Loads the favorites, warning when they could not be read.
async fn open(page: &FavoritesPage) {
    if let LoadOutcome::Failed(e) = page.open().await {
        eprintln!("{}", format!("Could not load favorites: {}", e).yellow());
    }
}

pub async fn list(ctx: &AppContext, html: bool) -> Result<()> {
    let page = ctx.favorites_page();
    open(&page).await;

    if html {
        println!("{}", page.render().await?);
    } else {
        print_cards(&page.cards().await, NO_FAVORITES_MESSAGE);
    }
    Ok(())
}

pub async fn remove(ctx: &AppContext, arxiv_id: &str, yes: bool) -> Result<()> {
    let page = ctx.favorites_page();
    open(&page).await;

    let Some(paper) = ctx.favorites.get(arxiv_id).await else {
        println!("{}", format!("{} is not in favorites", arxiv_id).bright_black());
        return Ok(());
    };
    if !yes && !confirm(&format!("Remove \"{}\" from favorites?", paper.title))? {
        return Ok(());
    }

    if page.remove(arxiv_id).await? {
        println!("{}", format!("Removed {}", arxiv_id).bright_green());
    }
    Ok(())
}

pub async fn note(ctx: &AppContext, arxiv_id: &str, note: Option<String>) -> Result<()> {
    let page = ctx.favorites_page();
    open(&page).await;

    let Some(paper) = ctx.favorites.get(arxiv_id).await else {
        println!("{}", format!("{} is not in favorites", arxiv_id).bright_black());
        return Ok(());
    };
    let note = match note {
        Some(note) => note,
        None => match prompt("Note: ", &paper.user_note)? {
            Some(note) => note,
            None => return Ok(()),
        },
    };

    if page.update_note(arxiv_id, note.trim()).await? {
        println!("{}", format!("Updated note of {}", arxiv_id).bright_green());
    }
    Ok(())
}
