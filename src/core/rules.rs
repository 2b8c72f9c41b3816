//! Framework-specific naming tables.
//!
//! Everything the generator knows about React's naming conventions lives
//! here as plain data, so targeting another typings version means swapping
//! a [`FrameworkRules`] value rather than editing the traversal.

use crate::core::data::{AttrConfig, Namespace};

/// An attribute entry inserted before the declarations are read.
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    pub attribute: &'static str,
    pub namespace: Namespace,
    pub boolean: bool,
}

impl Seed {
    pub fn config(&self) -> AttrConfig {
        if self.boolean {
            AttrConfig::boolean()
        } else {
            AttrConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameworkRules {
    /// Interface enumerating every intrinsic element.
    pub intrinsic_elements: &'static str,
    /// Intrinsic element names that are not real HTML/SVG elements.
    pub ignored_elements: &'static [&'static str],
    /// Lowercased attribute-bag prefix -> element name.
    pub tag_renames: &'static [(&'static str, &'static str)],
    /// Attribute bags that don't configure a real element.
    pub excluded_tags: &'static [&'static str],
    /// Lowercased property name -> attribute name.
    pub attribute_renames: &'static [(&'static str, &'static str)],
    /// Properties that only exist in the framework and never reach the DOM.
    pub framework_attributes: &'static [&'static str],
    pub seeds: &'static [Seed],
}

impl FrameworkRules {
    pub const REACT: FrameworkRules = FrameworkRules {
        intrinsic_elements: "IntrinsicElements",
        ignored_elements: &["webview"],
        tag_renames: &[("anchor", "a")],
        excluded_tags: &["all", "webview"],
        attribute_renames: &[("classname", "class")],
        framework_attributes: &[
            "defaultchecked",
            "defaultvalue",
            "suppresscontenteditablewarning",
            "suppresshydrationwarning",
        ],
        seeds: &[
            // Missing from the typings entirely.
            Seed {
                attribute: "alt",
                namespace: Namespace::Html,
                boolean: false,
            },
            Seed {
                attribute: "alt",
                namespace: Namespace::Svg,
                boolean: false,
            },
            // Typed as a string union, but `crossorigin=""` means "anonymous",
            // so the empty value must not be dropped.
            Seed {
                attribute: "crossorigin",
                namespace: Namespace::Html,
                boolean: true,
            },
            Seed {
                attribute: "crossorigin",
                namespace: Namespace::Svg,
                boolean: false,
            },
        ],
    };

    pub fn tag_name(&self, raw: &str) -> String {
        normalise(raw, self.tag_renames)
    }

    pub fn attribute_name(&self, raw: &str) -> String {
        normalise(raw, self.attribute_renames)
    }

    pub fn is_excluded_tag(&self, tag: &str) -> bool {
        self.excluded_tags.contains(&tag)
    }

    pub fn is_framework_attribute(&self, attribute: &str) -> bool {
        self.framework_attributes.contains(&attribute)
    }
}

impl Default for FrameworkRules {
    fn default() -> Self {
        Self::REACT
    }
}

/// Lowercase `name`, then apply `renames`.
fn normalise(name: &str, renames: &[(&str, &str)]) -> String {
    let lower = name.to_lowercase();
    renames
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| to.to_string())
        .unwrap_or(lower)
}
