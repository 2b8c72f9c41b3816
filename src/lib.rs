//! Attrgen - HTML/SVG attribute metadata generator
//!
//! Attrgen reads the React type declarations (`@types/react`) and produces a
//! JSON table describing which tags exist in the HTML and SVG namespaces and
//! how each attribute behaves on them (boolean, case-insensitive, trimmable,
//! default value and so on). Minifiers and formatters consume the table.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Declaration parsing, tag and attribute classification, output
pub mod cli;
pub mod config;
pub mod core;
