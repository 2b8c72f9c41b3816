use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::syntax::swc::SwcNode;

pub struct ParsedDeclarations {
    pub module: Module,
}

impl ParsedDeclarations {
    /// Root of the declaration tree, as seen by the generator.
    pub fn root(&self) -> SwcNode<'_> {
        SwcNode::Module(&self.module)
    }
}

/// Parse TypeScript declaration source into an AST.
pub fn parse_declarations(code: String, file_path: &str) -> Result<ParsedDeclarations> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            dts: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse declarations {}: {:?}", file_path, e))?;

        Ok(ParsedDeclarations { module })
    })
}

/// Read and parse a declaration file.
pub fn parse_declaration_file(path: &Path) -> Result<ParsedDeclarations> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read declaration file: {}", path.display()))?;
    parse_declarations(code, &path.to_string_lossy())
}
