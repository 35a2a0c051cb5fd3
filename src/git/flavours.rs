//! Flavour discovery from a branch's patch directory
//!
//! Each flavour keeps its patches in its own directory under the patch
//! directory (`build-scripts/patches/<flavour>/...`). The flavour set of a
//! branch is read straight from its tree with `git ls-tree`, so the branch
//! does not need to be checked out.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::runner::run_git;
use crate::error::CheckResult;
use crate::process::CommandRunner;

/// List the flavours present at `<remote>/<branch>`, or `<remote>/HEAD` when
/// no branch is given.
///
/// An empty or missing patch directory yields no flavours.
pub fn branch_flavours(
    runner: &dyn CommandRunner,
    repo_root: &Path,
    remote: &str,
    patch_dir: &Path,
    branch: Option<&str>,
) -> CheckResult<Vec<String>> {
    let tree = format!("{remote}/{}", branch.unwrap_or("HEAD"));
    let patch_dir_arg = patch_dir.to_string_lossy();
    let listing = run_git(
        runner,
        &[
            "ls-tree",
            "--full-tree",
            "-r",
            "--name-only",
            &tree,
            &patch_dir_arg,
        ],
        Some(repo_root),
    )?;
    Ok(flavours_from_tree_listing(&listing, patch_dir))
}

/// Derive flavour names from `git ls-tree --name-only` output.
///
/// The flavour of a file is the last component of its parent directory,
/// relative to `patch_dir`. Files directly inside `patch_dir` and paths outside
/// it contribute nothing. Names are distinct and sorted.
pub fn flavours_from_tree_listing(listing: &str, patch_dir: &Path) -> Vec<String> {
    let parents: BTreeSet<PathBuf> = listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let relative = Path::new(line).strip_prefix(patch_dir).ok()?;
            let parent = relative.parent()?;
            (!parent.as_os_str().is_empty()).then(|| parent.to_path_buf())
        })
        .collect();

    let names: BTreeSet<String> = parents
        .iter()
        .filter_map(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    names.into_iter().collect()
}
