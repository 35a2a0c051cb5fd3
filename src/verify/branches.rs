//! Branch family assertion
//!
//! A release branch is healthy when it exists on the source-hosting remote
//! together with one autoupdate branch per flavour, and the autoupdate
//! branches are mirrored on the build-farm remote.

use crate::error::{CheckError, CheckResult};
use crate::git::autoupdate_branches;
use crate::session::CheckSession;

/// Assert that `leader` and its autoupdate branches exist on both remotes.
///
/// The build-farm remote is checked for the autoupdate branches only, unless
/// `build_farm_checks_leader` is set in the configuration.
pub fn confirm_all_branches_exist(session: &CheckSession, leader: &str) -> CheckResult<()> {
    let config = session.config();
    let source = config.source_repo.as_str();
    let build_farm = config.build_farm_repo.as_str();

    if !session.branch_exists(source, leader)? {
        return Err(CheckError::LeaderMissing {
            remote: source.to_string(),
            branch: leader.to_string(),
        });
    }

    let flavours = session.branch_flavours(Some(leader))?;
    let autoupdate = autoupdate_branches(leader, &flavours);

    let mut family = Vec::with_capacity(autoupdate.len() + 1);
    family.push(leader.to_string());
    family.extend(autoupdate.iter().cloned());

    let missing = missing_branches(session, source, &family)?;
    if !missing.is_empty() {
        return Err(CheckError::BranchesMissing {
            remote: source.to_string(),
            branches: missing,
        });
    }

    let mirrored = if config.build_farm_checks_leader {
        &family
    } else {
        &autoupdate
    };
    let missing = missing_branches(session, build_farm, mirrored)?;
    if !missing.is_empty() {
        return Err(CheckError::BranchesMissing {
            remote: build_farm.to_string(),
            branches: missing,
        });
    }

    Ok(())
}

/// Branches from `branches` that do not exist on `repo`, in input order.
pub fn missing_branches(
    session: &CheckSession,
    repo: &str,
    branches: &[String],
) -> CheckResult<Vec<String>> {
    let mut missing = Vec::new();
    for branch in branches {
        if !session.branch_exists(repo, branch)? {
            missing.push(branch.clone());
        }
    }
    Ok(missing)
}
