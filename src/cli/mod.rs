//! Command line interface for scipio.
//!
//! This module parses arguments and dispatches to the command
//! implementations.

mod args;
pub mod commands;

pub use args::{Args, Command, GenerateVersionArgs, OptionsArgs};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(args)
}

/// Execute already parsed arguments
pub fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match args.command {
        Command::Platforms => commands::platforms::execute(),
        Command::Options(options) => commands::options::execute(&options),
        Command::GenerateVersion(generate) => commands::version::execute(&generate),
    }
}
