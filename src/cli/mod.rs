//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers and their results
//! - `report`: human-readable output
//! - `exit_status`: process exit codes

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command, GenerateArgs, GenerateCommand};
pub use commands::{CommandResult, CommandSummary, Destination, GenerateSummary, InitSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
