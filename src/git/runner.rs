//! Git command runner
//!
//! Thin wrappers that route every git invocation through a
//! [`CommandRunner`], keeping the argument list and working directory
//! handling in one place.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, CheckResult};
use crate::process::{CommandOptions, CommandRunner};

/// Run a git command and return its full stdout.
///
/// # Arguments
/// * `runner` - Executes the process
/// * `args` - Git command arguments (e.g., `&["ls-remote", "--heads", url]`)
/// * `repo_root` - Working directory, or the caller's when `None`
pub fn run_git(
    runner: &dyn CommandRunner,
    args: &[&str],
    repo_root: Option<&Path>,
) -> CheckResult<String> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push("git");
    argv.extend_from_slice(args);

    let options = match repo_root {
        Some(root) => CommandOptions::in_dir(root),
        None => CommandOptions::new(),
    };
    runner.run(&argv, &options)
}

/// Locate the git executable on PATH.
pub fn check_git_available() -> CheckResult<PathBuf> {
    which::which("git").map_err(|e| CheckError::Spawn {
        command: "git".to_string(),
        source: io::Error::new(
            io::ErrorKind::NotFound,
            format!("git is not installed or not in PATH: {e}"),
        ),
    })
}
