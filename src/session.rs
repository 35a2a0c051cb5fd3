//! Verification session state.
//!
//! A [`CheckSession`] is built once per run and passed to every check. It owns
//! the configuration, the command and HTTP backends, and both existence
//! caches, so repeated lookups within one run never repeat a network call.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CheckResult;
use crate::git::{branch_flavours, RemoteBranches};
use crate::process::{CommandRunner, SystemCommandRunner};
use crate::recipes::{recipe_url, HttpRecipeProbe, RecipeProbe, Recipes};

pub struct CheckSession {
    config: Config,
    project_root: PathBuf,
    runner: Box<dyn CommandRunner>,
    probe: Box<dyn RecipeProbe>,
    branches: RemoteBranches,
    recipes: Recipes,
}

impl CheckSession {
    /// Session backed by real git processes and HTTP.
    pub fn new(config: Config, project_root: &Path) -> CheckResult<Self> {
        let probe = HttpRecipeProbe::new(&config)?;
        Ok(Self::with_backends(
            config,
            project_root,
            Box::new(SystemCommandRunner),
            Box::new(probe),
        ))
    }

    pub fn with_backends(
        config: Config,
        project_root: &Path,
        runner: Box<dyn CommandRunner>,
        probe: Box<dyn RecipeProbe>,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            runner,
            probe,
            branches: RemoteBranches::new(),
            recipes: Recipes::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a configured path against the project root.
    pub fn project_path(&self, relative: &Path) -> PathBuf {
        self.project_root.join(relative)
    }

    pub fn branch_exists(&self, repo: &str, branch: &str) -> CheckResult<bool> {
        self.branches.exists(self.runner.as_ref(), repo, branch)
    }

    pub fn recipe_exists(&self, track: &str, flavour: &str) -> CheckResult<bool> {
        self.recipes.exists(
            self.probe.as_ref(),
            &self.config.recipe_url_base,
            track,
            flavour,
        )
    }

    pub fn recipe_url(&self, track: &str, flavour: &str) -> String {
        recipe_url(&self.config.recipe_url_base, track, flavour)
    }

    /// Flavours at `branch` on the configured remote (`HEAD` when `None`).
    pub fn branch_flavours(&self, branch: Option<&str>) -> CheckResult<Vec<String>> {
        branch_flavours(
            self.runner.as_ref(),
            &self.project_root,
            &self.config.remote,
            &self.config.patch_dir,
            branch,
        )
    }

    /// Distinct remote branch lookups issued so far.
    pub fn branch_queries(&self) -> usize {
        self.branches.queried()
    }

    /// Distinct recipe lookups issued so far.
    pub fn recipe_queries(&self) -> usize {
        self.recipes.queried()
    }
}
