pub mod branches;
pub mod docs;
pub mod recipes;
pub mod releases;

pub use branches::{confirm_all_branches_exist, missing_branches};
pub use docs::{
    check_channel_versions, check_k8s_version, read_component_version, read_docs_version,
    scan_channel_refs, ChannelRef,
};
pub use recipes::{confirm_all_recipes_exist, recipe_flavours};
pub use releases::{
    check_branches, check_prior_branches, check_prior_recipes, check_recipes, check_tip_recipes,
    Fixtures, ReleaseCheck,
};
