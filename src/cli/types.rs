use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use relcheck::version::ReleaseVersion;

fn parse_version(s: &str) -> Result<ReleaseVersion, String> {
    ReleaseVersion::parse(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "relcheck")]
#[command(about = "Release hygiene checks for k8s-snap branches, recipes and docs", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Root of the k8s-snap checkout
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Config file (defaults to relcheck.toml in the project root)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Release under test (e.g. v1.31.0)
    #[arg(
        long,
        global = true,
        value_name = "VERSION",
        env = "RELCHECK_CURRENT_RELEASE",
        value_parser = parse_version
    )]
    pub current_release: Option<ReleaseVersion>,

    /// Most recent stable release before the current one (e.g. v1.30.4)
    #[arg(
        long,
        global = true,
        value_name = "VERSION",
        env = "RELCHECK_PRIOR_STABLE_RELEASE",
        value_parser = parse_version
    )]
    pub prior_stable_release: Option<ReleaseVersion>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Branches exist for the prior stable release
    PriorBranches,

    /// Recipes exist for the prior stable release
    PriorRecipes,

    /// Branches exist for the current release
    Branches,

    /// Recipes exist for the current release
    Recipes,

    /// Recipes exist for tip (latest track, main branch)
    TipRecipes,

    /// k8s component version matches the docs
    K8sVersion,

    /// Run every check and report each outcome
    All,

    /// List the flavours found in a branch's patch directory
    Flavours {
        /// Branch to inspect (remote HEAD when omitted)
        #[arg(long)]
        branch: Option<String>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
