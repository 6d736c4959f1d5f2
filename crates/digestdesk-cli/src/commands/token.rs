use anyhow::{Result, bail};
use colored::Colorize;

use digestdesk_core::settings::CredentialSource;

use super::context::AppContext;
use super::prompt::prompt_secret;

/// Prompts for a token without echo and stores it. The token is never taken
/// from the command line, where it would end up in the shell history.
pub async fn set(ctx: &AppContext) -> Result<()> {
    let Some(token) = prompt_secret("GitHub token: ")? else {
        bail!("Cancelled");
    };

    ctx.favorites_page().store_credential(&token).await?;
    println!("{}", "Token saved".bright_green());
    Ok(())
}

pub async fn clear(ctx: &AppContext) -> Result<()> {
    ctx.favorites_page().clear_credential().await?;
    println!("{}", "Token cleared".bright_green());
    Ok(())
}

pub async fn status(ctx: &AppContext) -> Result<()> {
    let status = ctx.favorites_page().credential_status().await?;
    match (status.masked(), status.source) {
        (Some(mask), Some(CredentialSource::Environment)) => println!(
            "GitHub token: {} {}",
            mask,
            "(from the GITHUB_TOKEN environment variable)".bright_black()
        ),
        (Some(mask), _) => println!("GitHub token: {}", mask),
        (None, _) => println!("GitHub token: {}", "not set".bright_black()),
    }
    Ok(())
}
