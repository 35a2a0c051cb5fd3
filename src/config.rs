//! Configuration for release checks.
//!
//! Defaults describe the k8s-snap project. A `relcheck.toml` at the project
//! root (or an explicit `--config` file) overrides individual fields.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, CheckResult};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "relcheck.toml";

pub const DEFAULT_SOURCE_REPO: &str = "https://github.com/canonical/k8s-snap.git/";
pub const DEFAULT_BUILD_FARM_REPO: &str = "https://git.launchpad.net/k8s";
pub const DEFAULT_RECIPE_URL_BASE: &str = "https://launchpad.net/~containers/k8s/+snap/k8s-snap";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source-hosting remote holding release and autoupdate branches
    pub source_repo: String,
    /// Build-farm mirror of the source repository
    pub build_farm_repo: String,
    /// Recipe URLs are `{recipe_url_base}-{track}-{flavour}`
    pub recipe_url_base: String,
    /// Directory whose subdirectories name the branch flavours
    pub patch_dir: PathBuf,
    /// Remote name prefixed to branches when listing their trees
    pub remote: String,
    pub component_version_file: PathBuf,
    pub substitutions_file: PathBuf,
    /// Docs scanned for `channel X.Y` references
    pub channel_files: Vec<PathBuf>,
    pub tip_track: String,
    pub tip_branch: String,
    /// Flavour every recipe family carries regardless of patches
    pub fixed_flavour: String,
    /// Also require the release branch itself on the build-farm remote
    pub build_farm_checks_leader: bool,
    pub http_connect_timeout_secs: u64,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_repo: DEFAULT_SOURCE_REPO.to_string(),
            build_farm_repo: DEFAULT_BUILD_FARM_REPO.to_string(),
            recipe_url_base: DEFAULT_RECIPE_URL_BASE.to_string(),
            patch_dir: PathBuf::from("build-scripts/patches"),
            remote: "origin".to_string(),
            component_version_file: PathBuf::from("build-scripts/components/kubernetes/version"),
            substitutions_file: PathBuf::from("docs/canonicalk8s/reuse/substitutions.yaml"),
            channel_files: vec![
                PathBuf::from("docs/canonicalk8s/_parts/install.md"),
                PathBuf::from("README.md"),
            ],
            tip_track: "latest".to_string(),
            tip_branch: "main".to_string(),
            fixed_flavour: "classic".to_string(),
            build_farm_checks_leader: false,
            http_connect_timeout_secs: 10,
            http_timeout_secs: 60,
        }
    }
}

impl Config {
    /// Parse a config from TOML text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &Path) -> CheckResult<Self> {
        let mut config: Config = toml::from_str(content).map_err(|e| CheckError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.normalize();
        config.validate(path)?;
        Ok(config)
    }

    /// Load configuration for a project.
    ///
    /// An explicit path must exist. Otherwise `relcheck.toml` in the project
    /// root is used when present, falling back to defaults.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> CheckResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| CheckError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::from_toml(&content, &path)
    }

    fn normalize(&mut self) {
        self.source_repo = self.source_repo.trim().to_string();
        self.build_farm_repo = self.build_farm_repo.trim().to_string();
        self.recipe_url_base = self.recipe_url_base.trim().trim_end_matches('/').to_string();
    }

    fn validate(&self, path: &Path) -> CheckResult<()> {
        let required = [
            ("source_repo", &self.source_repo),
            ("build_farm_repo", &self.build_farm_repo),
            ("recipe_url_base", &self.recipe_url_base),
            ("remote", &self.remote),
            ("fixed_flavour", &self.fixed_flavour),
            ("tip_track", &self.tip_track),
            ("tip_branch", &self.tip_branch),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(CheckError::Config {
                    path: path.to_path_buf(),
                    message: format!("'{name}' must not be empty"),
                });
            }
        }
        Ok(())
    }
}
