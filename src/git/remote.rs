//! Remote branch existence checks
//!
//! A branch is looked up with `git ls-remote --heads`. Answers are cached per
//! (repository, branch) for the life of a [`RemoteBranches`] value, so each
//! pair reaches the network at most once per run.

use super::runner::run_git;
use crate::cache::ExistenceCache;
use crate::error::CheckResult;
use crate::process::CommandRunner;

/// Memoized view of branches on remote repositories.
#[derive(Debug, Default)]
pub struct RemoteBranches {
    cache: ExistenceCache<(String, String)>,
}

impl RemoteBranches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `branch` exists on `repo`.
    ///
    /// An unreachable remote is an error, never a "missing branch".
    pub fn exists(
        &self,
        runner: &dyn CommandRunner,
        repo: &str,
        branch: &str,
    ) -> CheckResult<bool> {
        let key = (repo.to_string(), branch.to_string());
        self.cache.get_or_probe(&key, || -> CheckResult<bool> {
            tracing::info!("Checking {branch} branch exists in {repo}");
            let listing = run_git(runner, &["ls-remote", "--heads", repo, branch], None)?;
            Ok(branch_in_listing(&listing, branch))
        })
    }

    /// Number of distinct (repository, branch) pairs queried so far.
    pub fn queried(&self) -> usize {
        self.cache.len()
    }
}

/// Whether `ls-remote` output mentions `branch`.
///
/// This is a plain substring test on the whole output, matching how the
/// release tooling has always read `ls-remote`.
pub fn branch_in_listing(listing: &str, branch: &str) -> bool {
    listing.contains(branch)
}
