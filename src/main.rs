mod cli;
mod fit_cmd;
mod ingest;
mod logging;
mod report;
mod search_cmd;
mod stepwise_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Fit(args) => fit_cmd::run(args),
        Command::Search(args) => search_cmd::run(args),
        Command::Stepwise(args) => stepwise_cmd::run(args),
    }
}
