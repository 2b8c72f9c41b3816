//! Core generation engine.
//!
//! ## Module Structure
//!
//! - `syntax`: parser-independent node trait, tree flattener, swc adapter
//! - `parsers`: declaration file parsing and override table loading
//! - `tags`: intrinsic element names and attribute-bag classification
//! - `attributes`: attribute classification and global/tag merging
//! - `overrides`: hand-authored override rules
//! - `rules`: framework naming tables (renames, exclusions, seeds)
//! - `data`: output data types
//! - `pipeline`: flatten -> classify -> merge
//! - `output`: JSON serialization and atomic file writes

pub mod attributes;
pub mod data;
pub mod output;
pub mod overrides;
pub mod parsers;
pub mod pipeline;
pub mod rules;
pub mod syntax;
pub mod tags;

pub use attributes::{ConflictPolicy, ConflictWarning};
pub use data::{AttrConfig, GeneratedData, Namespace};
pub use overrides::{OverrideRule, OverrideTable};
pub use pipeline::{GenerateOptions, GenerationOutcome, generate, generate_from_source};
