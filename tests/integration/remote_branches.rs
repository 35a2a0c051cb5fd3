//! Remote branch existence against local repositories

use serial_test::serial;

use crate::helpers::{create_branch, git_session, init_test_repo, repo_url, StaticProbe};
use relcheck::{CheckError, Config};

#[test]
#[serial]
fn test_existing_branch_found_on_remote() {
    let upstream = init_test_repo();
    create_branch("release-1.30", upstream.path());

    let session = git_session(Config::default(), upstream.path(), StaticProbe::default());
    let url = repo_url(&upstream);

    assert!(session.branch_exists(&url, "release-1.30").unwrap());
    assert!(session.branch_exists(&url, "main").unwrap());
}

#[test]
#[serial]
fn test_missing_branch_is_false_not_error() {
    let upstream = init_test_repo();
    let session = git_session(Config::default(), upstream.path(), StaticProbe::default());

    let found = session
        .branch_exists(&repo_url(&upstream), "release-1.99")
        .unwrap();
    assert!(!found);
}

#[test]
#[serial]
fn test_repeated_lookups_hit_cache() {
    let upstream = init_test_repo();
    create_branch("release-1.30", upstream.path());
    let session = git_session(Config::default(), upstream.path(), StaticProbe::default());
    let url = repo_url(&upstream);

    for _ in 0..3 {
        assert!(session.branch_exists(&url, "release-1.30").unwrap());
    }
    assert!(!session.branch_exists(&url, "release-1.31").unwrap());

    assert_eq!(session.branch_queries(), 2);
}

#[test]
#[serial]
fn test_unreachable_remote_is_error() {
    let workdir = init_test_repo();
    let missing = workdir.path().join("no-such-repo");
    let session = git_session(Config::default(), workdir.path(), StaticProbe::default());

    let err = session
        .branch_exists(&missing.display().to_string(), "main")
        .unwrap_err();
    assert!(matches!(err, CheckError::CommandFailed { .. }));
    assert_eq!(session.branch_queries(), 0);
}
