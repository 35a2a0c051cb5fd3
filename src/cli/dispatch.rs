use anyhow::{Context, Result};
use clap::CommandFactory;

use relcheck::commands::{check, completions, flavours};
use relcheck::{CheckSession, Config, Fixtures, ReleaseCheck};

use super::types::{Cli, Commands, GlobalArgs};

fn build_session(global: &GlobalArgs) -> Result<CheckSession> {
    let config = Config::load(&global.project_root, global.config.as_deref())
        .context("Failed to load configuration")?;
    CheckSession::new(config, &global.project_root).context("Failed to set up checks")
}

fn fixtures(global: &GlobalArgs) -> Fixtures {
    Fixtures {
        current_release: global.current_release,
        prior_stable_release: global.prior_stable_release,
    }
}

fn single(check: ReleaseCheck, global: &GlobalArgs) -> Result<()> {
    let session = build_session(global)?;
    check::execute(check, &session, &fixtures(global))
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let global = &cli.global;
    match cli.command {
        Commands::PriorBranches => single(ReleaseCheck::PriorBranches, global),
        Commands::PriorRecipes => single(ReleaseCheck::PriorRecipes, global),
        Commands::Branches => single(ReleaseCheck::Branches, global),
        Commands::Recipes => single(ReleaseCheck::Recipes, global),
        Commands::TipRecipes => single(ReleaseCheck::TipRecipes, global),
        Commands::K8sVersion => single(ReleaseCheck::K8sVersion, global),
        Commands::All => {
            let session = build_session(global)?;
            check::execute_all(&session, &fixtures(global))
        }
        Commands::Flavours { ref branch } => {
            let session = build_session(global)?;
            flavours::execute(&session, branch.as_deref())
        }
        Commands::Completions { shell } => {
            completions::execute(&mut Cli::command(), shell);
            Ok(())
        }
    }
}
