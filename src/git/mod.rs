//! Git queries used by the release checks
//!
//! This module provides:
//! - A git runner over the shared [`CommandRunner`](crate::process::CommandRunner)
//! - Release and autoupdate branch naming
//! - Flavour discovery from a branch's patch directory
//! - Memoized remote branch existence checks

pub mod flavours;
pub mod naming;
pub mod remote;
pub mod runner;

pub use flavours::{branch_flavours, flavours_from_tree_listing};
pub use naming::{autoupdate_branch, autoupdate_branches, release_branch};
pub use remote::{branch_in_listing, RemoteBranches};
pub use runner::{check_git_available, run_git};
