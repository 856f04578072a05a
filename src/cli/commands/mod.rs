//! Command implementations for the LAS processor CLI
//!
//! Each command lives in its own module:
//! - `convert`: batch conversion to CSV and JSON artifacts
//! - `inspect`: structural report for a single file

pub mod convert;
pub mod inspect;
pub mod shared;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the handler of the subcommand given on the command line.
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Err(Error::configuration("No command given")),
    }
}
