//! Hand-authored attribute overrides.
//!
//! The typings only say what values an attribute accepts. Defaults,
//! case-insensitivity and whitespace handling come from a small table keyed
//! by attribute name, where each rule lists the `namespace:tag` keys it
//! applies to:
//!
//! ```yaml
//! class:
//!   - tags: ["html:*", "svg:*"]
//!     isCollapsible: true
//!     isTrimmable: true
//! ```

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRule {
    /// `namespace:tag` keys, `*` for the namespace-wide entry.
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_case_insensitive: Option<bool>,
    #[serde(default)]
    pub is_collapsible: Option<bool>,
    /// Accepted for compatibility with existing tables; not emitted.
    #[serde(default)]
    pub is_positive_integer: Option<bool>,
    #[serde(default)]
    pub is_redundant_if_empty: Option<bool>,
    #[serde(default)]
    pub is_trimmable: Option<bool>,
}

impl OverrideRule {
    pub fn applies_to(&self, qualified_tag: &str) -> bool {
        self.tags.iter().any(|t| t == qualified_tag)
    }
}

/// Accept `defaultValue: 0` as well as `defaultValue: "0"`.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| match s {
        Scalar::Str(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// attribute name -> rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable {
    rules: BTreeMap<String, Vec<OverrideRule>>,
}

impl OverrideTable {
    pub fn new(rules: BTreeMap<String, Vec<OverrideRule>>) -> Self {
        Self { rules }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty YAML document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse override table as YAML")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse override table as JSON")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The single rule for `attribute` on `qualified_tag` (`html:a`, `svg:*`).
    ///
    /// More than one matching rule is an authoring error in the table.
    pub fn lookup(&self, attribute: &str, qualified_tag: &str) -> Result<Option<&OverrideRule>> {
        let Some(rules) = self.rules.get(attribute) else {
            return Ok(None);
        };
        let mut matching = rules.iter().filter(|r| r.applies_to(qualified_tag));
        let first = matching.next();
        if matching.next().is_some() {
            bail!(
                "Tag-attribute combination {}[{}] has multiple configurations",
                qualified_tag,
                attribute
            );
        }
        Ok(first)
    }
}
