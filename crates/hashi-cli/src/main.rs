//! Command-line front end for the bridge puzzle generator and solvers.
//!
//! # Usage
//!
//! ```sh
//! hashi generate --difficulty hard --seed "daily puzzle" --output puzzle.hashi
//! hashi solve puzzle.hashi --strategy smart
//! hashi show puzzle.hashi
//! ```
//!
//! Set `RUST_LOG=debug` to see solver and generator statistics.

use std::process::ExitCode;

use clap::Parser as _;

use crate::cli::Cli;

mod cli;
mod command;
mod error;
mod puzzle_file;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match command::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
