//! Parser-independent view of a declaration tree.
//!
//! The generator never touches concrete parser types. It walks anything that
//! implements [`SyntaxNode`], which exposes just enough of a TypeScript
//! declaration tree to find interfaces, their property signatures, and the
//! shape of each property's declared type.
//!
//! - `swc`: adapter over the swc TypeScript AST

pub mod swc;

use std::collections::BTreeSet;

/// Coarse node classification, only as fine-grained as the generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The parsed file itself.
    Root,
    /// `declare namespace X { .. }`, `declare global { .. }`, `declare module "x" { .. }`.
    Namespace,
    /// The body of a namespace.
    ModuleBlock,
    /// `interface X { .. }`.
    Interface,
    /// `name?: Type;` inside an interface.
    PropertySignature,
    /// Any other interface member (methods, index/call signatures, accessors).
    OtherMember,
    Other,
}

/// Discrete type tags used for classification by set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    BooleanKeyword,
    StringKeyword,
    NumberKeyword,
    UndefinedKeyword,
    NullKeyword,
    OtherKeyword,
    TypeReference,
    LiteralType,
    Other,
}

/// A referenced type name split on `.`, e.g. `React.SVGProps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub segments: Vec<String>,
}

impl TypeRef {
    /// The right-most segment (`SVGProps` in `React.SVGProps`).
    pub fn last(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

/// Declared type of a property signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    Keyword(TypeKind),
    Reference(TypeRef),
    Union(Vec<TypeShape>),
    Literal,
    Other,
}

impl TypeShape {
    /// Kind of each union member, or the singleton kind of a non-union type.
    ///
    /// Nested unions are not flattened; a union member that is itself a union
    /// contributes [`TypeKind::Other`].
    pub fn kinds(&self) -> BTreeSet<TypeKind> {
        match self {
            TypeShape::Union(members) => members.iter().map(TypeShape::kind).collect(),
            other => BTreeSet::from([other.kind()]),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeShape::Keyword(kind) => *kind,
            TypeShape::Reference(_) => TypeKind::TypeReference,
            TypeShape::Literal => TypeKind::LiteralType,
            TypeShape::Union(_) | TypeShape::Other => TypeKind::Other,
        }
    }

    pub fn as_reference(&self) -> Option<&TypeRef> {
        match self {
            TypeShape::Reference(type_ref) => Some(type_ref),
            _ => None,
        }
    }
}

/// Read-only query surface over a foreign declaration tree.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Direct children, in source order.
    fn children(&self) -> Vec<Self>;

    /// Declared name for interfaces, namespaces and property signatures.
    fn name(&self) -> Option<String>;

    /// Declared type of a property signature, `None` when absent or not applicable.
    fn type_shape(&self) -> Option<TypeShape>;
}

/// Collect `root` and every descendant exactly once.
///
/// Uses a growing work-list instead of recursion so deeply nested
/// declaration files cannot overflow the stack. Parents always precede
/// their children in the result.
pub fn flatten<N: SyntaxNode + Clone>(root: &N) -> Vec<N> {
    let mut nodes = vec![root.clone()];
    let mut i = 0;
    while i < nodes.len() {
        let children = nodes[i].children();
        nodes.extend(children);
        i += 1;
    }
    nodes
}
