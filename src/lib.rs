//! Command-line frontend for building railway networks and querying them.

use std::io::Write;

use thiserror::Error;

pub mod build;
pub mod cli;
pub mod info;
pub mod routing;
pub mod stations;

pub use cli::{Cli, Command};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] railnav_core::Error),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("no route between '{from}' and '{to}'")]
    NoRoute { from: String, to: String },
}

/// Runs one subcommand, writing its report to `out`
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Build(args) => build::run(&args, out),
        Command::Route(args) => routing::run(&args, out),
        Command::Stations(args) => stations::run(&args, out),
        Command::Info(args) => info::run(&args, out),
    }
}
