use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::ConflictWarning;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Init(InitSummary),
}

/// Where the generated JSON went.
#[derive(Debug)]
pub enum Destination {
    File(PathBuf),
    /// `--stdout`: the serialized JSON, printed by the reporter.
    Stdout(String),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub destination: Destination,
    pub attribute_count: usize,
    pub html_tag_count: usize,
    pub svg_tag_count: usize,
    pub warnings: Vec<ConflictWarning>,
    /// False when no config file was found and defaults were used.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub fail_on_warnings: bool,
}

impl CommandResult {
    pub fn warning_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Generate(summary) => summary.warnings.len(),
            CommandSummary::Init(_) => 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            _ if self.fail_on_warnings && self.warning_count() > 0 => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
