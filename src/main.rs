use anyhow::Result;
use clap::Parser;

use relcheck::telemetry::{init_tracing, level_for};

mod cli;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(
        cli.global.log_json,
        level_for(cli.global.verbose, cli.global.quiet),
    );
    dispatch(cli)
}
