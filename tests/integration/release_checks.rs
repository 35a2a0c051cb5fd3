//! Release checks end to end against local source and build-farm remotes

use serial_test::serial;
use tempfile::TempDir;

use crate::helpers::{
    add_flavour_patches, checkout_path, clone_repo, create_branch, git_session, init_test_repo,
    local_config, StaticProbe,
};
use relcheck::{CheckError, Fixtures, ReleaseCheck, ReleaseVersion};

const RECIPE_BASE: &str = "https://recipes.test/k8s-snap";

struct Remotes {
    source: TempDir,
    build_farm: TempDir,
    clone: TempDir,
}

/// Source remote with `release-1.30` carrying two flavours and every
/// autoupdate branch; the build farm mirrors the listed branches.
fn setup_remotes(build_farm_branches: &[&str]) -> Remotes {
    let source = init_test_repo();
    create_branch("release-1.30", source.path());
    add_flavour_patches("release-1.30", &["strict", "moonray"], source.path());
    create_branch("autoupdate/release-1.30-strict", source.path());
    create_branch("autoupdate/release-1.30-moonray", source.path());

    let build_farm = init_test_repo();
    for branch in build_farm_branches {
        create_branch(branch, build_farm.path());
    }

    let clone = clone_repo(source.path());
    Remotes {
        source,
        build_farm,
        clone,
    }
}

fn fixtures() -> Fixtures {
    Fixtures {
        current_release: Some(ReleaseVersion::parse("v1.31.0").unwrap()),
        prior_stable_release: Some(ReleaseVersion::parse("v1.30.4").unwrap()),
    }
}

#[test]
#[serial]
fn test_prior_branches_pass_when_mirrored() {
    let remotes = setup_remotes(&[
        "autoupdate/release-1.30-strict",
        "autoupdate/release-1.30-moonray",
    ]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        StaticProbe::default(),
    );

    ReleaseCheck::PriorBranches
        .run(&session, &fixtures())
        .unwrap();
}

#[test]
#[serial]
fn test_prior_branches_report_missing_mirror() {
    let remotes = setup_remotes(&["autoupdate/release-1.30-moonray"]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        StaticProbe::default(),
    );

    let err = ReleaseCheck::PriorBranches
        .run(&session, &fixtures())
        .unwrap_err();
    match err {
        CheckError::BranchesMissing { remote, branches } => {
            assert_eq!(remote, remotes.build_farm.path().display().to_string());
            assert_eq!(branches, vec!["autoupdate/release-1.30-strict"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_build_farm_leader_checked_when_configured() {
    let remotes = setup_remotes(&[
        "autoupdate/release-1.30-strict",
        "autoupdate/release-1.30-moonray",
    ]);
    let mut config = local_config(&remotes.source, &remotes.build_farm);
    config.build_farm_checks_leader = true;
    let session = git_session(config, &checkout_path(&remotes.clone), StaticProbe::default());

    let err = ReleaseCheck::PriorBranches
        .run(&session, &fixtures())
        .unwrap_err();
    assert!(
        matches!(err, CheckError::BranchesMissing { ref branches, .. } if branches == &["release-1.30"])
    );
}

#[test]
#[serial]
fn test_current_branches_fail_before_branch_cut() {
    let remotes = setup_remotes(&[]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        StaticProbe::default(),
    );

    let err = ReleaseCheck::Branches
        .run(&session, &fixtures())
        .unwrap_err();
    assert!(matches!(err, CheckError::LeaderMissing { ref branch, .. } if branch == "release-1.31"));
}

#[test]
#[serial]
fn test_prior_recipes_pass_for_full_family() {
    let remotes = setup_remotes(&[]);
    let probe = StaticProbe::with_recipes(RECIPE_BASE, "1.30", &["classic", "strict", "moonray"]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        probe,
    );

    ReleaseCheck::PriorRecipes
        .run(&session, &fixtures())
        .unwrap();
    assert_eq!(session.recipe_queries(), 3);
}

#[test]
#[serial]
fn test_prior_recipes_report_missing_flavour() {
    let remotes = setup_remotes(&[]);
    let probe = StaticProbe::with_recipes(RECIPE_BASE, "1.30", &["classic", "moonray"]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        probe,
    );

    let err = ReleaseCheck::PriorRecipes
        .run(&session, &fixtures())
        .unwrap_err();
    match err {
        CheckError::RecipesMissing { track, flavours } => {
            assert_eq!(track, "1.30");
            assert_eq!(flavours, vec!["strict"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_tip_recipes_use_main_flavours() {
    let source = init_test_repo();
    add_flavour_patches("main", &["strict"], source.path());
    let build_farm = init_test_repo();
    let clone = clone_repo(source.path());

    let probe = StaticProbe::with_recipes(RECIPE_BASE, "latest", &["classic", "strict"]);
    let session = git_session(
        local_config(&source, &build_farm),
        &checkout_path(&clone),
        probe,
    );

    ReleaseCheck::TipRecipes
        .run(&session, &Fixtures::default())
        .unwrap();
}

#[test]
#[serial]
fn test_lookups_shared_across_checks() {
    let remotes = setup_remotes(&[
        "autoupdate/release-1.30-strict",
        "autoupdate/release-1.30-moonray",
    ]);
    let session = git_session(
        local_config(&remotes.source, &remotes.build_farm),
        &checkout_path(&remotes.clone),
        StaticProbe::default(),
    );

    ReleaseCheck::PriorBranches
        .run(&session, &fixtures())
        .unwrap();
    let after_first = session.branch_queries();

    ReleaseCheck::PriorBranches
        .run(&session, &fixtures())
        .unwrap();
    assert_eq!(session.branch_queries(), after_first);
}
