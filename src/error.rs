//! Error types for release checks.

use std::path::PathBuf;

/// Errors produced while running a release check.
///
/// "Not found" answers from the existence checkers are plain `false` values;
/// they only become errors here once an aggregate assertion decides they are
/// a failure.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("command `{command}` exited with status {}: {}", display_status(.status), .stderr.trim())]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML in {}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("{message} ({} has no '{field}' field)", .path.display())]
    MissingField {
        path: PathBuf,
        field: String,
        message: String,
    },

    #[error("branch {branch} does not exist in {remote}")]
    LeaderMissing { remote: String, branch: String },

    #[error("branches do not exist in {remote}: {}", .branches.join(", "))]
    BranchesMissing {
        remote: String,
        branches: Vec<String>,
    },

    #[error("recipes do not exist for {track}: {}", .flavours.join(", "))]
    RecipesMissing { track: String, flavours: Vec<String> },

    #[error("component version {component} does not match docs version {docs}")]
    VersionMismatch { component: String, docs: String },

    #[error("{}:{line}: channel {found} does not match expected {expected}", .path.display())]
    ChannelMismatch {
        path: PathBuf,
        line: usize,
        found: String,
        expected: String,
    },

    #[error("{fixture} is required for this check")]
    MissingFixture { fixture: &'static str },

    #[error("invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

/// Result type for release check operations.
pub type CheckResult<T> = std::result::Result<T, CheckError>;
