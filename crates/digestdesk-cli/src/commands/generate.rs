use anyhow::Result;
use colored::Colorize;

use super::context::AppContext;

/// Triggers the generation workflow. Missing inputs fall back to the last
/// used ones.
pub async fn run(
    ctx: &AppContext,
    categories: Option<String>,
    interests: Option<String>,
) -> Result<()> {
    let page = ctx.favorites_page();
    let last = page.generation_params().await?;
    let categories = categories.unwrap_or(last.categories);
    let interests = interests.unwrap_or(last.interests);

    let sent = page.trigger_generation(&categories, &interests).await?;
    println!(
        "{}",
        format!("Digest generation started for {}", sent.categories).bright_green()
    );
    println!(
        "{}",
        format!(
            "Workflow {} is running in {}; the new digest appears when it finishes.",
            ctx.site.workflow, ctx.site.repository
        )
        .bright_black()
    );
    Ok(())
}
