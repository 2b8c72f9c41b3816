use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::AttrConfig;

/// Tag key used for entries that apply to every tag in a namespace.
pub const GLOBAL_TAG: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Html,
    Svg,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::Html, Namespace::Svg];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Html => "html",
            Namespace::Svg => "svg",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known element names per namespace, sorted and deduplicated.
pub type TagTable = BTreeMap<Namespace, Vec<String>>;

/// tag (or [`GLOBAL_TAG`]) -> config.
pub type TagConfigs = BTreeMap<String, AttrConfig>;

/// attribute -> namespace -> tag -> config.
pub type AttributeTable = BTreeMap<String, BTreeMap<Namespace, TagConfigs>>;

/// The generated artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedData {
    pub tags: TagTable,
    pub attributes: AttributeTable,
}

impl GeneratedData {
    /// Config for `attribute` on `tag`, falling back to the namespace-wide entry.
    pub fn lookup(&self, attribute: &str, namespace: Namespace, tag: &str) -> Option<&AttrConfig> {
        let tags = self.attributes.get(attribute)?.get(&namespace)?;
        tags.get(tag).or_else(|| tags.get(GLOBAL_TAG))
    }

    pub fn tag_count(&self, namespace: Namespace) -> usize {
        self.tags.get(&namespace).map_or(0, Vec::len)
    }
}

/// Empty tag table with both namespaces present.
pub fn empty_tag_table() -> TagTable {
    Namespace::ALL.into_iter().map(|ns| (ns, Vec::new())).collect()
}
