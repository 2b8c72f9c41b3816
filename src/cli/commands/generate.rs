use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{CommandResult, CommandSummary, Destination, GenerateSummary};
use crate::cli::args::GenerateCommand;
use crate::config::load_config;
use crate::core::data::Namespace;
use crate::core::output::{to_json, write_output};
use crate::core::parsers::{declarations::parse_declaration_file, overrides::load_overrides};
use crate::core::{GenerateOptions, OverrideTable, generate as generate_data};

/// Inputs after merging the config file with command-line flags.
#[derive(Debug)]
struct Settings {
    declarations: PathBuf,
    overrides: Option<PathBuf>,
    output: PathBuf,
    options: GenerateOptions,
    fail_on_warnings: bool,
}

fn resolve_settings(cmd: &GenerateCommand, dir: &Path) -> Result<(Settings, bool)> {
    let loaded = load_config(dir)?;
    let config = loaded.config;
    let args = &cmd.args;

    let settings = Settings {
        declarations: dir.join(
            args.declarations
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.declarations)),
        ),
        overrides: args
            .overrides
            .clone()
            .or_else(|| config.overrides.as_ref().map(PathBuf::from))
            .map(|path| dir.join(path)),
        output: dir.join(
            args.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output)),
        ),
        options: GenerateOptions {
            policy: args.policy.unwrap_or(config.conflict_policy),
            ..Default::default()
        },
        fail_on_warnings: args.fail_on_warnings || config.fail_on_warnings,
    };
    Ok((settings, loaded.from_file))
}

/// Generate the attribute data file.
///
/// All inputs are read and the whole table is built before anything is
/// written, so a failed run leaves the previous output untouched.
pub fn generate(cmd: GenerateCommand, dir: &Path) -> Result<CommandResult> {
    let (settings, config_from_file) = resolve_settings(&cmd, dir)?;

    let overrides = match &settings.overrides {
        Some(path) => load_overrides(path)?,
        None => OverrideTable::default(),
    };
    let parsed = parse_declaration_file(&settings.declarations)?;
    let outcome = generate_data(&parsed.root(), &overrides, &settings.options)?;
    let data = outcome.data;

    let destination = if cmd.args.stdout {
        Destination::Stdout(to_json(&data)?)
    } else {
        write_output(&settings.output, &data)?;
        // Report the path as the user wrote it, relative to the working directory.
        let shown = settings
            .output
            .strip_prefix(dir)
            .unwrap_or(&settings.output)
            .to_path_buf();
        Destination::File(shown)
    };

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            destination,
            attribute_count: data.attributes.len(),
            html_tag_count: data.tag_count(Namespace::Html),
            svg_tag_count: data.tag_count(Namespace::Svg),
            warnings: outcome.warnings,
            config_from_file,
        }),
        fail_on_warnings: settings.fail_on_warnings,
    })
}
