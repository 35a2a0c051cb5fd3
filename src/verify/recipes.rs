//! Recipe family assertion

use crate::error::{CheckError, CheckResult};
use crate::session::CheckSession;

/// Flavours that need a recipe: the fixed flavour first, then the branch
/// flavours, without duplicates.
pub fn recipe_flavours(fixed: &str, branch_flavours: &[String]) -> Vec<String> {
    let mut flavours = vec![fixed.to_string()];
    for flavour in branch_flavours {
        if !flavours.contains(flavour) {
            flavours.push(flavour.clone());
        }
    }
    flavours
}

/// Assert that a recipe exists at `track` for every flavour of `branch`.
pub fn confirm_all_recipes_exist(
    session: &CheckSession,
    track: &str,
    branch: &str,
) -> CheckResult<()> {
    tracing::info!("Checking {track} recipe exists");
    let config = session.config();

    if !session.branch_exists(&config.source_repo, branch)? {
        return Err(CheckError::LeaderMissing {
            remote: config.source_repo.clone(),
            branch: branch.to_string(),
        });
    }

    let flavours = recipe_flavours(&config.fixed_flavour, &session.branch_flavours(Some(branch))?);

    let mut missing = Vec::new();
    for flavour in flavours {
        if !session.recipe_exists(track, &flavour)? {
            tracing::warn!(url = %session.recipe_url(track, &flavour), "recipe not found");
            missing.push(flavour);
        }
    }

    if !missing.is_empty() {
        return Err(CheckError::RecipesMissing {
            track: track.to_string(),
            flavours: missing,
        });
    }
    Ok(())
}
