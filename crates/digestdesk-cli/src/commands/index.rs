use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use digestdesk_infrastructure::write_digest_index;

pub fn rebuild(dir: &Path) -> Result<()> {
    let index = write_digest_index(dir)
        .with_context(|| format!("Failed to index {}", dir.display()))?;
    println!(
        "{}",
        format!(
            "Wrote {} with {} digests",
            dir.join("index.json").display(),
            index.len()
        )
        .bright_green()
    );
    Ok(())
}
