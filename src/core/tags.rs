//! Tag and namespace classification.
//!
//! Two things come out of the flattened declaration tree:
//! - the [`TagTable`], from the properties of `IntrinsicElements`
//! - the attribute bags, interfaces named like `AnchorHTMLAttributes` or
//!   `SVGAttributes`, each bound to the (namespace, tag) it configures

use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

use crate::core::data::{GLOBAL_TAG, Namespace, TagTable, empty_tag_table};
use crate::core::rules::FrameworkRules;
use crate::core::syntax::{NodeKind, SyntaxNode};

static TAG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static ATTRIBUTE_BAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]*)(HTML|SVG)Attributes").unwrap());

/// One attribute-bag declaration bound to the element it configures.
#[derive(Debug, Clone)]
pub struct TagRecord<N> {
    pub namespace: Namespace,
    /// Empty for the namespace-wide bag (`HTMLAttributes`, `SVGAttributes`).
    pub tag: String,
    pub node: N,
}

impl<N> TagRecord<N> {
    pub fn is_global(&self) -> bool {
        self.tag.is_empty()
    }

    /// Tag key in the attribute table: the tag name, or `*`.
    pub fn table_tag(&self) -> &str {
        if self.is_global() { GLOBAL_TAG } else { &self.tag }
    }

    /// `html:a`, `svg:*`.
    pub fn qualified_tag(&self) -> String {
        format!("{}:{}", self.namespace, self.table_tag())
    }
}

fn interfaces<N: SyntaxNode>(nodes: &[N]) -> impl Iterator<Item = (&N, String)> {
    nodes
        .iter()
        .filter(|n| n.kind() == NodeKind::Interface)
        .filter_map(|n| n.name().map(|name| (n, name)))
}

/// Build the per-namespace element lists from `IntrinsicElements`.
///
/// A property typed `React.DetailedHTMLProps<..>` is an HTML element, one
/// typed `React.SVGProps<..>` is SVG. Anything that isn't a type reference
/// means the typings changed shape and is an error.
pub fn collect_tags<N: SyntaxNode>(nodes: &[N], rules: &FrameworkRules) -> Result<TagTable> {
    let mut tags = empty_tag_table();

    for (interface, _) in interfaces(nodes).filter(|(_, name)| name == rules.intrinsic_elements) {
        for member in interface.children() {
            if member.kind() != NodeKind::PropertySignature {
                continue;
            }
            let name = member.name().unwrap_or_default();
            if !TAG_NAME_REGEX.is_match(&name) || rules.ignored_elements.contains(&name.as_str()) {
                continue;
            }

            let shape = member.type_shape();
            let Some(type_ref) = shape.as_ref().and_then(|s| s.as_reference()) else {
                bail!(
                    "{}.{} is not a type reference; the declaration format may have changed",
                    rules.intrinsic_elements,
                    name
                );
            };
            let namespace = if type_ref.last().contains("HTML") {
                Namespace::Html
            } else {
                Namespace::Svg
            };
            tags.entry(namespace).or_default().push(name);
        }
    }

    for names in tags.values_mut() {
        names.sort();
        names.dedup();
    }
    Ok(tags)
}

/// Find every attribute bag, sorted by namespace then tag.
///
/// The namespace-wide HTML bag must come first: tag-specific HTML bags
/// repeat some global attributes, and those repeats are only recognised
/// once the global entries exist.
pub fn collect_tag_records<N: SyntaxNode + Clone>(
    nodes: &[N],
    rules: &FrameworkRules,
) -> Result<Vec<TagRecord<N>>> {
    let mut records = Vec::new();

    for (interface, name) in interfaces(nodes) {
        let Some(captures) = ATTRIBUTE_BAG_REGEX.captures(&name) else {
            continue;
        };
        let namespace = match &captures[2] {
            "HTML" => Namespace::Html,
            _ => Namespace::Svg,
        };
        let tag = rules.tag_name(&captures[1]);
        if rules.is_excluded_tag(&tag) {
            continue;
        }
        records.push(TagRecord {
            namespace,
            tag,
            node: interface.clone(),
        });
    }

    records.sort_by(|a, b| a.namespace.cmp(&b.namespace).then_with(|| a.tag.cmp(&b.tag)));

    match records.first() {
        Some(first) if first.namespace == Namespace::Html && first.is_global() => Ok(records),
        _ => bail!("Global HTML attributes is not first to be processed"),
    }
}
