//! Report formatting and printing utilities.
//!
//! Results go to stdout, diagnostics (dropped conflicts, notes) to stderr.
//! Separate from core logic to allow attrgen to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, Destination, GenerateSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ConflictWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, verbose, out, err),
        CommandSummary::Init(init) => {
            if init.created {
                let _ = writeln!(
                    out,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            } else {
                let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
            }
        }
    }
}

fn print_generate<O: Write, E: Write>(
    summary: &GenerateSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if verbose && !summary.config_from_file {
        let _ = writeln!(
            err,
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    for warning in &summary.warnings {
        print_warning(warning, verbose, err);
    }

    match &summary.destination {
        Destination::Stdout(json) => {
            let _ = write!(out, "{}", json);
        }
        Destination::File(path) => {
            let _ = writeln!(
                out,
                "{} Generated {} attributes for {} html and {} svg tags -> {}",
                SUCCESS_MARK.green(),
                summary.attribute_count,
                summary.html_tag_count,
                summary.svg_tag_count,
                path.display()
            );
            if !summary.warnings.is_empty() {
                let _ = writeln!(
                    out,
                    "{}",
                    format!(
                        "{} conflicting tag attribute(s) dropped in favour of global attributes",
                        summary.warnings.len()
                    )
                    .yellow()
                );
            }
        }
    }
}

fn print_warning<E: Write>(warning: &ConflictWarning, verbose: bool, err: &mut E) {
    let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), warning);
    if verbose {
        let _ = writeln!(
            err,
            "  {} {}:*[{}] = {}",
            "global".dimmed(),
            warning.namespace,
            warning.attribute,
            warning.global
        );
        let _ = writeln!(
            err,
            "  {} {}:{}[{}] = {}",
            "dropped".dimmed(),
            warning.namespace,
            warning.tag,
            warning.attribute,
            warning.specific
        );
    }
}
