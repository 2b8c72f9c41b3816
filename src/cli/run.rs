/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit behavior
/// - `Err` if the command fails (config not found, parse errors, conflicts, ...)
use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let dir = env::current_dir().context("Failed to read current directory")?;
    match command {
        Some(Command::Generate(cmd)) => generate(cmd, &dir),
        Some(Command::Init) => init(&dir),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
