//! Run release checks and report their outcomes

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::error::CheckError;
use crate::git::check_git_available;
use crate::session::CheckSession;
use crate::verify::{Fixtures, ReleaseCheck};

/// Result of one check within `all`.
#[derive(Debug)]
pub enum CheckOutcome {
    Passed,
    Failed(CheckError),
    Skipped(&'static str),
}

impl CheckOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckOutcome::Failed(_))
    }
}

fn run_one(check: ReleaseCheck, session: &CheckSession, fixtures: &Fixtures) -> Result<(), CheckError> {
    if check.uses_git() {
        check_git_available()?;
    }
    check.run(session, fixtures)
}

/// Execute a single named check.
pub fn execute(check: ReleaseCheck, session: &CheckSession, fixtures: &Fixtures) -> Result<()> {
    println!(
        "{} Checking that {}...",
        "→".cyan().bold(),
        check.description()
    );

    match run_one(check, session, fixtures) {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), check);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), check);
            Err(e).with_context(|| format!("Check '{check}' failed"))
        }
    }
}

/// Run every check independently; a failure never stops the remaining checks.
pub fn run_all(session: &CheckSession, fixtures: &Fixtures) -> Vec<(ReleaseCheck, CheckOutcome)> {
    ReleaseCheck::ALL
        .into_iter()
        .map(|check| {
            let outcome = if !check.is_runnable(fixtures) {
                CheckOutcome::Skipped("release version not supplied")
            } else {
                match run_one(check, session, fixtures) {
                    Ok(()) => CheckOutcome::Passed,
                    Err(e) => {
                        tracing::debug!(%check, error = %e, "check failed");
                        CheckOutcome::Failed(e)
                    }
                }
            };
            (check, outcome)
        })
        .collect()
}

/// Execute all checks and fail if any of them failed.
pub fn execute_all(session: &CheckSession, fixtures: &Fixtures) -> Result<()> {
    let outcomes = run_all(session, fixtures);

    for (check, outcome) in &outcomes {
        match outcome {
            CheckOutcome::Passed => println!("{} {}", "✓".green().bold(), check),
            CheckOutcome::Failed(e) => {
                println!("{} {}: {}", "✗".red().bold(), check, e);
            }
            CheckOutcome::Skipped(reason) => {
                println!("{} {} ({})", "−".dimmed(), check.to_string().dimmed(), reason);
            }
        }
    }

    let failed = outcomes.iter().filter(|(_, o)| o.is_failure()).count();
    if failed > 0 {
        bail!("{failed} of {} checks failed", outcomes.len());
    }
    Ok(())
}
