//! Release checks
//!
//! Each check is an independent pass/fail verification built from the branch
//! and recipe family assertions or the docs version check. Checks that need a
//! release version take it from [`Fixtures`].

use std::fmt;
use std::str::FromStr;

use super::branches::confirm_all_branches_exist;
use super::docs::check_k8s_version;
use super::recipes::confirm_all_recipes_exist;
use crate::error::{CheckError, CheckResult};
use crate::git::release_branch;
use crate::session::CheckSession;
use crate::version::ReleaseVersion;

/// Externally supplied release versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fixtures {
    /// Release under test
    pub current_release: Option<ReleaseVersion>,
    /// Most recent stable release before the current one
    pub prior_stable_release: Option<ReleaseVersion>,
}

impl Fixtures {
    fn current(&self) -> CheckResult<&ReleaseVersion> {
        self.current_release
            .as_ref()
            .ok_or(CheckError::MissingFixture {
                fixture: "current release",
            })
    }

    fn prior(&self) -> CheckResult<&ReleaseVersion> {
        self.prior_stable_release
            .as_ref()
            .ok_or(CheckError::MissingFixture {
                fixture: "prior stable release",
            })
    }
}

/// The release checks, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseCheck {
    PriorBranches,
    PriorRecipes,
    Branches,
    Recipes,
    TipRecipes,
    K8sVersion,
}

impl ReleaseCheck {
    pub const ALL: [ReleaseCheck; 6] = [
        ReleaseCheck::PriorBranches,
        ReleaseCheck::PriorRecipes,
        ReleaseCheck::Branches,
        ReleaseCheck::Recipes,
        ReleaseCheck::TipRecipes,
        ReleaseCheck::K8sVersion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReleaseCheck::PriorBranches => "prior-branches",
            ReleaseCheck::PriorRecipes => "prior-recipes",
            ReleaseCheck::Branches => "branches",
            ReleaseCheck::Recipes => "recipes",
            ReleaseCheck::TipRecipes => "tip-recipes",
            ReleaseCheck::K8sVersion => "k8s-version",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReleaseCheck::PriorBranches => "branches exist for the prior stable release",
            ReleaseCheck::PriorRecipes => "recipes exist for the prior stable release",
            ReleaseCheck::Branches => "branches exist for the current release",
            ReleaseCheck::Recipes => "recipes exist for the current release",
            ReleaseCheck::TipRecipes => "recipes exist for tip",
            ReleaseCheck::K8sVersion => "k8s component version matches the docs",
        }
    }

    /// Whether `fixtures` carry what this check needs.
    pub fn is_runnable(self, fixtures: &Fixtures) -> bool {
        match self {
            ReleaseCheck::PriorBranches | ReleaseCheck::PriorRecipes => {
                fixtures.prior_stable_release.is_some()
            }
            ReleaseCheck::Branches | ReleaseCheck::Recipes => fixtures.current_release.is_some(),
            ReleaseCheck::TipRecipes | ReleaseCheck::K8sVersion => true,
        }
    }

    /// Whether this check talks to git.
    pub fn uses_git(self) -> bool {
        !matches!(self, ReleaseCheck::K8sVersion)
    }

    pub fn run(self, session: &CheckSession, fixtures: &Fixtures) -> CheckResult<()> {
        match self {
            ReleaseCheck::PriorBranches => check_prior_branches(session, fixtures.prior()?),
            ReleaseCheck::PriorRecipes => check_prior_recipes(session, fixtures.prior()?),
            ReleaseCheck::Branches => check_branches(session, fixtures.current()?),
            ReleaseCheck::Recipes => check_recipes(session, fixtures.current()?),
            ReleaseCheck::TipRecipes => check_tip_recipes(session),
            ReleaseCheck::K8sVersion => check_k8s_version(session).map(|_| ()),
        }
    }
}

impl fmt::Display for ReleaseCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseCheck::ALL
            .into_iter()
            .find(|check| check.name() == s)
            .ok_or_else(|| format!("unknown check: {s}"))
    }
}

/// The prior stable release branch family must exist before main moves on.
/// With v1.31.0 current, `release-1.30` and its autoupdate branches must exist.
pub fn check_prior_branches(session: &CheckSession, prior: &ReleaseVersion) -> CheckResult<()> {
    confirm_all_branches_exist(session, &release_branch(prior))
}

/// The prior stable release recipes must exist, e.g. `k8s-snap-1.30-classic`.
pub fn check_prior_recipes(session: &CheckSession, prior: &ReleaseVersion) -> CheckResult<()> {
    confirm_all_recipes_exist(session, &prior.track(), &release_branch(prior))
}

/// The current release must have its release branch family.
pub fn check_branches(session: &CheckSession, current: &ReleaseVersion) -> CheckResult<()> {
    confirm_all_branches_exist(session, &release_branch(current))
}

/// The current release must have recipes to build with. This fails when a new
/// minor is detected before its release branch is cut from main.
pub fn check_recipes(session: &CheckSession, current: &ReleaseVersion) -> CheckResult<()> {
    confirm_all_recipes_exist(session, &current.track(), &release_branch(current))
}

/// Tip recipes build from the tip branch and must always exist.
pub fn check_tip_recipes(session: &CheckSession) -> CheckResult<()> {
    let config = session.config();
    confirm_all_recipes_exist(session, &config.tip_track, &config.tip_branch)
}
