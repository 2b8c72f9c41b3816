//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Generate the attribute data file from React type declarations
//! - `init`: Initialize attrgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::ConflictPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// React type declarations file (overrides config file)
    #[arg(long)]
    pub declarations: Option<PathBuf>,

    /// Attribute override table, YAML or JSON (overrides config file)
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Output JSON file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How to handle tag attributes that conflict with global ones (overrides config file)
    #[arg(long, value_enum)]
    pub policy: Option<ConflictPolicy>,

    /// Exit with status 1 when conflicting attributes were dropped
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Print the JSON to stdout instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate HTML/SVG attribute data from React type declarations
    Generate(GenerateCommand),
    /// Initialize a new .attrgenrc.json configuration file
    Init,
}
