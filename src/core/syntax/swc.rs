//! [`SyntaxNode`] adapter over the swc TypeScript AST.
//!
//! Only the declaration forms that can contain interfaces are modelled:
//! module items, namespaces (including `declare global`), module blocks,
//! interfaces and their members. Everything else is an opaque
//! [`NodeKind::Other`] leaf.

use swc_ecma_ast::{
    Decl, ExportDecl, Expr, Lit, Module, ModuleDecl, ModuleItem, Stmt, TsEntityName,
    TsInterfaceDecl, TsKeywordTypeKind, TsModuleBlock, TsModuleDecl, TsModuleName,
    TsNamespaceBody, TsNamespaceDecl, TsPropertySignature, TsType, TsTypeElement,
    TsUnionOrIntersectionType,
};

use super::{NodeKind, SyntaxNode, TypeKind, TypeRef, TypeShape};

#[derive(Debug, Clone, Copy)]
pub enum SwcNode<'a> {
    Module(&'a Module),
    Namespace(&'a TsModuleDecl),
    NestedNamespace(&'a TsNamespaceDecl),
    Block(&'a TsModuleBlock),
    Interface(&'a TsInterfaceDecl),
    Member(&'a TsTypeElement),
    Other,
}

impl<'a> SwcNode<'a> {
    fn from_item(item: &'a ModuleItem) -> Self {
        match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => Self::from_decl(decl),
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl { decl, .. })) => {
                Self::from_decl(decl)
            }
            _ => SwcNode::Other,
        }
    }

    fn from_decl(decl: &'a Decl) -> Self {
        match decl {
            Decl::TsInterface(interface) => SwcNode::Interface(interface),
            Decl::TsModule(module) => SwcNode::Namespace(module),
            _ => SwcNode::Other,
        }
    }

    fn from_body(body: &'a TsNamespaceBody) -> Self {
        match body {
            TsNamespaceBody::TsModuleBlock(block) => SwcNode::Block(block),
            TsNamespaceBody::TsNamespaceDecl(nested) => SwcNode::NestedNamespace(nested),
        }
    }

    fn property(&self) -> Option<&'a TsPropertySignature> {
        match *self {
            SwcNode::Member(TsTypeElement::TsPropertySignature(prop)) => Some(prop),
            _ => None,
        }
    }
}

impl SyntaxNode for SwcNode<'_> {
    fn kind(&self) -> NodeKind {
        match self {
            SwcNode::Module(_) => NodeKind::Root,
            SwcNode::Namespace(_) | SwcNode::NestedNamespace(_) => NodeKind::Namespace,
            SwcNode::Block(_) => NodeKind::ModuleBlock,
            SwcNode::Interface(_) => NodeKind::Interface,
            SwcNode::Member(TsTypeElement::TsPropertySignature(_)) => NodeKind::PropertySignature,
            SwcNode::Member(_) => NodeKind::OtherMember,
            SwcNode::Other => NodeKind::Other,
        }
    }

    fn children(&self) -> Vec<Self> {
        match *self {
            SwcNode::Module(module) => module.body.iter().map(SwcNode::from_item).collect(),
            SwcNode::Namespace(decl) => decl.body.iter().map(SwcNode::from_body).collect(),
            SwcNode::NestedNamespace(decl) => vec![SwcNode::from_body(&decl.body)],
            SwcNode::Block(block) => block.body.iter().map(SwcNode::from_item).collect(),
            SwcNode::Interface(interface) => {
                interface.body.body.iter().map(SwcNode::Member).collect()
            }
            SwcNode::Member(_) | SwcNode::Other => Vec::new(),
        }
    }

    fn name(&self) -> Option<String> {
        match self {
            SwcNode::Namespace(decl) => match &decl.id {
                TsModuleName::Ident(ident) => Some(ident.sym.to_string()),
                TsModuleName::Str(s) => s.value.as_str().map(|s| s.to_string()),
            },
            SwcNode::NestedNamespace(decl) => Some(decl.id.sym.to_string()),
            SwcNode::Interface(interface) => Some(interface.id.sym.to_string()),
            SwcNode::Member(_) => {
                let prop = self.property()?;
                if prop.computed {
                    return None;
                }
                match &*prop.key {
                    Expr::Ident(ident) => Some(ident.sym.to_string()),
                    Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
                    _ => None,
                }
            }
            SwcNode::Module(_) | SwcNode::Block(_) | SwcNode::Other => None,
        }
    }

    fn type_shape(&self) -> Option<TypeShape> {
        let ann = self.property()?.type_ann.as_ref()?;
        Some(shape_of(&ann.type_ann))
    }
}

fn shape_of(ty: &TsType) -> TypeShape {
    match ty {
        TsType::TsKeywordType(keyword) => TypeShape::Keyword(match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => TypeKind::BooleanKeyword,
            TsKeywordTypeKind::TsStringKeyword => TypeKind::StringKeyword,
            TsKeywordTypeKind::TsNumberKeyword => TypeKind::NumberKeyword,
            TsKeywordTypeKind::TsUndefinedKeyword => TypeKind::UndefinedKeyword,
            TsKeywordTypeKind::TsNullKeyword => TypeKind::NullKeyword,
            _ => TypeKind::OtherKeyword,
        }),
        TsType::TsTypeRef(type_ref) => TypeShape::Reference(TypeRef {
            segments: entity_segments(&type_ref.type_name),
        }),
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            TypeShape::Union(union.types.iter().map(|t| shape_of(t)).collect())
        }
        TsType::TsLitType(_) => TypeShape::Literal,
        _ => TypeShape::Other,
    }
}

/// `React.JSX.Element` -> `["React", "JSX", "Element"]`.
fn entity_segments(name: &TsEntityName) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = name;
    loop {
        match current {
            TsEntityName::Ident(ident) => {
                segments.push(ident.sym.to_string());
                break;
            }
            TsEntityName::TsQualifiedName(qualified) => {
                segments.push(qualified.right.sym.to_string());
                current = &qualified.left;
            }
        }
    }
    segments.reverse();
    segments
}
