//! Input file readers.
//!
//! - `declarations`: TypeScript declaration (`.d.ts`) parser, uses swc for AST generation
//! - `overrides`: override table loader (YAML or JSON)

pub mod declarations;
pub mod overrides;
