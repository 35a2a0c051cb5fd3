//! Shared test helpers for building upstream repositories and projects

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

use relcheck::recipes::RecipeProbe;
use relcheck::{CheckResult, CheckSession, Config};

/// Run git in `dir`, panicking with stderr on failure.
pub fn git(args: &[&str], dir: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Test helper: Create a temporary git repository with an initial commit on main
pub fn init_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repo_root = temp_dir.path();

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);
    git(&["config", "commit.gpgsign", "false"], repo_root);

    fs::write(repo_root.join("README.md"), "# k8s-snap\n").expect("Failed to write README.md");
    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Initial commit"], repo_root);
    git(&["branch", "-M", "main"], repo_root);

    temp_dir
}

/// Test helper: Create `branch` from main
pub fn create_branch(name: &str, repo_root: &Path) {
    git(&["branch", name, "main"], repo_root);
}

/// Test helper: Commit one patch per flavour under build-scripts/patches on `branch`
pub fn add_flavour_patches(branch: &str, flavours: &[&str], repo_root: &Path) {
    git(&["checkout", branch], repo_root);
    for flavour in flavours {
        let dir = repo_root.join("build-scripts/patches").join(flavour);
        fs::create_dir_all(&dir).expect("Failed to create patch dir");
        fs::write(dir.join("0001-flavour.patch"), format!("{flavour} patch\n"))
            .expect("Failed to write patch");
    }
    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Add flavour patches"], repo_root);
    git(&["checkout", "main"], repo_root);
}

/// Test helper: Clone `upstream` so its branches are visible as origin/*
pub fn clone_repo(upstream: &Path) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dest = temp_dir.path().join("k8s-snap");
    let output = Command::new("git")
        .args(["clone", "--quiet"])
        .arg(upstream)
        .arg(&dest)
        .output()
        .expect("Failed to run git clone");
    assert!(
        output.status.success(),
        "git clone failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    temp_dir
}

/// Path of the checkout inside a directory returned by [`clone_repo`].
pub fn checkout_path(clone: &TempDir) -> std::path::PathBuf {
    clone.path().join("k8s-snap")
}

pub fn repo_url(repo: &TempDir) -> String {
    repo.path().display().to_string()
}

/// Config pointing both remotes at local repositories.
pub fn local_config(source: &TempDir, build_farm: &TempDir) -> Config {
    Config {
        source_repo: repo_url(source),
        build_farm_repo: repo_url(build_farm),
        recipe_url_base: "https://recipes.test/k8s-snap".to_string(),
        ..Config::default()
    }
}

/// Recipe probe answering 200 for the listed URLs and 404 otherwise.
#[derive(Default)]
pub struct StaticProbe {
    present: HashMap<String, u16>,
}

impl StaticProbe {
    pub fn with_recipes(base: &str, track: &str, flavours: &[&str]) -> Self {
        let present = flavours
            .iter()
            .map(|flavour| (format!("{base}-{track}-{flavour}"), 200))
            .collect();
        Self { present }
    }
}

impl RecipeProbe for StaticProbe {
    fn status(&self, url: &str) -> CheckResult<u16> {
        Ok(self.present.get(url).copied().unwrap_or(404))
    }
}

/// Session running real git in `project_root` with a static recipe probe.
pub fn git_session(config: Config, project_root: &Path, probe: StaticProbe) -> CheckSession {
    CheckSession::with_backends(
        config,
        project_root,
        Box::new(relcheck::process::SystemCommandRunner),
        Box::new(probe),
    )
}
