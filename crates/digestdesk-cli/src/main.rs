use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "digestdesk")]
#[command(about = "Browse research paper digests and keep favorites in a GitHub repository", long_about = None)]
struct Cli {
    /// Path to config.toml (default: <config dir>/digestdesk/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding config.toml and settings.toml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available digests, newest first
    List {
        /// Print the HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show one digest
    Show {
        /// Digest date (YYYY-MM-DD) or a query such as `date=2024-01-01`
        target: String,
        #[arg(long)]
        html: bool,
    },
    /// Save a paper of a digest to the favorites
    Save {
        /// Digest date (YYYY-MM-DD)
        date: String,
        arxiv_id: String,
        /// Note to attach; prompted for when omitted
        #[arg(long)]
        note: Option<String>,
    },
    /// Manage saved papers
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage the GitHub token used for writes
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Trigger digest generation
    Generate {
        /// Comma separated arXiv categories (default: last used)
        #[arg(long)]
        categories: Option<String>,
        /// Free-text research interests (default: last used)
        #[arg(long)]
        interests: Option<String>,
    },
    /// Rebuild digests/index.json from the digest files in a directory
    Index {
        dir: PathBuf,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List saved papers
    List {
        #[arg(long)]
        html: bool,
    },
    /// Remove a saved paper
    Remove {
        arxiv_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Edit the note of a saved paper
    Note {
        arxiv_id: String,
        /// New note; prompted for when omitted
        #[arg(long)]
        note: Option<String>,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Store a token (prompted for without echo)
    Set,
    /// Forget the stored token
    Clear,
    /// Show whether a token is stored
    Status,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Index { dir } = &cli.command {
        return commands::index::rebuild(dir);
    }

    let ctx = AppContext::load(cli.config.as_deref(), cli.config_dir.as_deref())?;

    match cli.command {
        Commands::List { html } => commands::digests::list(&ctx, html).await?,
        Commands::Show { target, html } => commands::digests::show(&ctx, &target, html).await?,
        Commands::Save {
            date,
            arxiv_id,
            note,
        } => commands::digests::save(&ctx, &date, &arxiv_id, note).await?,
        Commands::Favorites { action } => match action {
            FavoritesAction::List { html } => commands::favorites::list(&ctx, html).await?,
            FavoritesAction::Remove { arxiv_id, yes } => {
                commands::favorites::remove(&ctx, &arxiv_id, yes).await?
            }
            FavoritesAction::Note { arxiv_id, note } => {
                commands::favorites::note(&ctx, &arxiv_id, note).await?
            }
        },
        Commands::Token { action } => match action {
            TokenAction::Set => commands::token::set(&ctx).await?,
            TokenAction::Clear => commands::token::clear(&ctx).await?,
            TokenAction::Status => commands::token::status(&ctx).await?,
        },
        Commands::Generate {
            categories,
            interests,
        } => commands::generate::run(&ctx, categories, interests).await?,
        // Needs no configuration; handled above.
        Commands::Index { .. } => {}
    }

    Ok(())
}
