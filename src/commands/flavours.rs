//! List the flavours of a branch

use anyhow::{Context, Result};
use colored::Colorize;

use crate::git::check_git_available;
use crate::session::CheckSession;

/// Print the flavours at `branch` (the remote HEAD when `None`).
pub fn execute(session: &CheckSession, branch: Option<&str>) -> Result<()> {
    check_git_available()?;
    let label = branch.unwrap_or("HEAD");
    let flavours = session
        .branch_flavours(branch)
        .with_context(|| format!("Failed to list flavours for {label}"))?;

    if flavours.is_empty() {
        println!("{} No flavours found at {}", "−".dimmed(), label);
        return Ok(());
    }

    println!("{}", format!("Flavours at {label}:").bold());
    for flavour in &flavours {
        println!("  {flavour}");
    }
    Ok(())
}
