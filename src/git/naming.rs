//! Branch naming conventions for releases

use crate::version::ReleaseVersion;

/// Release branch for a version, e.g. `release-1.31`.
pub fn release_branch(version: &ReleaseVersion) -> String {
    format!("release-{}", version.track())
}

/// Autoupdate branch tracking `flavour` patches on top of `leader`.
pub fn autoupdate_branch(leader: &str, flavour: &str) -> String {
    format!("autoupdate/{leader}-{flavour}")
}

/// Autoupdate branches for every flavour, in flavour order.
pub fn autoupdate_branches(leader: &str, flavours: &[String]) -> Vec<String> {
    flavours
        .iter()
        .map(|flavour| autoupdate_branch(leader, flavour))
        .collect()
}
