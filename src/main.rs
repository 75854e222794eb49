mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use infra::env::ProcessEnv;

fn main() -> Result<()> {
    infra::logging::init(&ProcessEnv);

    let cli = Cli::parse();
    cli.run()
}
