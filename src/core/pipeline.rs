//! Generation pipeline.
//!
//! 1. Flatten the declaration tree
//! 2. Find the attribute bags and the intrinsic element names
//! 3. Merge every bag into the attribute table
//!
//! Nothing is written here; callers serialize the result with
//! [`crate::core::output`] only once generation has succeeded.

use anyhow::Result;

use crate::core::attributes::{ConflictPolicy, ConflictWarning, build_attribute_table};
use crate::core::data::GeneratedData;
use crate::core::overrides::OverrideTable;
use crate::core::parsers::declarations::parse_declarations;
use crate::core::rules::FrameworkRules;
use crate::core::syntax::{SyntaxNode, flatten};
use crate::core::tags::{collect_tag_records, collect_tags};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub policy: ConflictPolicy,
    pub rules: FrameworkRules,
}

#[derive(Debug, Default)]
pub struct GenerationOutcome {
    pub data: GeneratedData,
    /// Tag-specific entries dropped under [`ConflictPolicy::Lenient`].
    pub warnings: Vec<ConflictWarning>,
}

pub fn generate<N: SyntaxNode + Clone>(
    root: &N,
    overrides: &OverrideTable,
    options: &GenerateOptions,
) -> Result<GenerationOutcome> {
    let nodes = flatten(root);

    let records = collect_tag_records(&nodes, &options.rules)?;
    let tags = collect_tags(&nodes, &options.rules)?;
    let merged = build_attribute_table(&records, &options.rules, overrides, options.policy)?;

    Ok(GenerationOutcome {
        data: GeneratedData {
            tags,
            attributes: merged.attributes,
        },
        warnings: merged.warnings,
    })
}

/// Parse declaration source and generate from it.
pub fn generate_from_source(
    code: &str,
    file_path: &str,
    overrides: &OverrideTable,
    options: &GenerateOptions,
) -> Result<GenerationOutcome> {
    let parsed = parse_declarations(code.to_string(), file_path)?;
    generate(&parsed.root(), overrides, options)
}
