mod cli;
mod clock;
mod config;
mod display;
mod logging;
mod numeral_cmd;
mod pascha_cmd;
mod today_cmd;
mod tone_cmd;

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
        Command::Today(args) => today_cmd::run(args),
        Command::Pascha(args) => pascha_cmd::run(args),
        Command::Tone(args) => tone_cmd::run(args),
        Command::Numeral(args) => numeral_cmd::run(args),
    }
}
