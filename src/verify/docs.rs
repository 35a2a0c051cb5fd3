//! Kubernetes version consistency between the components manifest and docs
//!
//! The component version file is the source of truth. The docs substitutions
//! file must declare the same major.minor, and every `channel X.Y` or
//! `channel=X.Y` reference in the scanned docs must point at it too.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{CheckError, CheckResult};
use crate::session::CheckSession;
use crate::version::ReleaseVersion;

/// Matches `channel 1.31` and `channel=1.31`, capturing major and minor.
pub const CHANNEL_PATTERN: &str = r"channel[ =](\d+)\.(\d+)";

static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();

/// Compiled [`CHANNEL_PATTERN`], built on first use.
fn channel_regex() -> &'static Regex {
    CHANNEL_RE.get_or_init(|| Regex::new(CHANNEL_PATTERN).expect("Invalid regex pattern"))
}

/// A channel reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    /// 1-based line number
    pub line: usize,
    pub major: String,
    pub minor: String,
}

impl ChannelRef {
    pub fn track(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    fn matches(&self, expected: &ReleaseVersion) -> bool {
        self.major == expected.major.to_string() && self.minor == expected.minor.to_string()
    }
}

fn read_file(path: &Path) -> CheckResult<String> {
    fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the version from the components manifest (`v1.31.2` style).
pub fn read_component_version(path: &Path) -> CheckResult<ReleaseVersion> {
    ReleaseVersion::parse(&read_file(path)?)
}

/// Read the top-level `version` field from the docs substitutions YAML.
///
/// The field must be a string. Unquoted numbers are rejected.
pub fn read_docs_version(path: &Path) -> CheckResult<ReleaseVersion> {
    let content = read_file(path)?;
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| CheckError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let missing = || CheckError::MissingField {
        path: path.to_path_buf(),
        field: "version".to_string(),
        message: "substitutions file doesn't contain the k8s version".to_string(),
    };

    match yaml.get("version") {
        Some(serde_yaml::Value::String(s)) => ReleaseVersion::parse(s),
        // A bare `1.30` loads as a float and loses its trailing zero.
        Some(serde_yaml::Value::Number(n)) => Err(CheckError::InvalidVersion {
            input: n.to_string(),
            reason: format!(
                "version in {} must be a quoted string, e.g. version: '1.30'",
                path.display()
            ),
        }),
        _ => Err(missing()),
    }
}

/// Every channel reference in `content`, in document order.
pub fn scan_channel_refs(content: &str) -> Vec<ChannelRef> {
    let re = channel_regex();

    content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            re.captures_iter(line)
                .map(move |caps| ChannelRef {
                    line: idx + 1,
                    major: caps[1].to_string(),
                    minor: caps[2].to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Assert every channel reference in the file at `path` names `expected`.
///
/// A file without channel references passes.
pub fn check_channel_versions(expected: &ReleaseVersion, path: &Path) -> CheckResult<()> {
    let content = read_file(path)?;
    let refs = scan_channel_refs(&content);
    tracing::debug!(path = %path.display(), count = refs.len(), "channel references");

    match refs.into_iter().find(|r| !r.matches(expected)) {
        Some(mismatch) => Err(CheckError::ChannelMismatch {
            path: path.to_path_buf(),
            line: mismatch.line,
            found: mismatch.track(),
            expected: expected.track(),
        }),
        None => Ok(()),
    }
}

/// Assert the component version, docs version and channel references agree
/// on major.minor. Returns the component version on success.
pub fn check_k8s_version(session: &CheckSession) -> CheckResult<ReleaseVersion> {
    let config = session.config();

    let component = read_component_version(&session.project_path(&config.component_version_file))?;
    let docs = read_docs_version(&session.project_path(&config.substitutions_file))?;
    tracing::info!(%component, %docs, "comparing k8s versions");

    if !component.same_minor(&docs) {
        return Err(CheckError::VersionMismatch {
            component: component.to_string(),
            docs: docs.to_string(),
        });
    }

    for file in &config.channel_files {
        check_channel_versions(&component, &session.project_path(file))?;
    }
    Ok(component)
}
