//! Simfasta CLI Binary
//!
//! Extracts per-node FASTA files from a phylogenetic simulation directory.

use anyhow::Context;
use clap::Parser;
use simfasta::logging::init_logging;
use simfasta::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.config.clone()).context("loading configuration")?;
    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("initializing logging")?;
    let output = context.execute(cli)?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
