//! Attribute classification and merging.
//!
//! Every property of every attribute bag becomes one [`AttrConfig`] filed
//! under `attributes[name][namespace][tag]`. Declared types decide
//! `boolean` and the default `redundantIfEmpty`; the override table supplies
//! the rest. Namespace-wide (`*`) entries take precedence: a tag-specific
//! entry is never stored next to a global one, and if the two disagree the
//! [`ConflictPolicy`] decides between a warning and a hard error.


use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::data::{AttrConfig, AttributeTable, GLOBAL_TAG, Namespace, TagConfigs, flag};
use crate::core::overrides::OverrideTable;
use crate::core::rules::FrameworkRules;
use crate::core::syntax::{NodeKind, SyntaxNode, TypeKind};
use crate::core::tags::TagRecord;

/// What to do when a tag-specific attribute disagrees with the global one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Abort generation.
    Strict,
    /// Keep the global entry, drop the tag-specific one and warn.
    #[default]
    Lenient,
}

/// A tag-specific entry dropped in favour of the global entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictWarning {
    pub attribute: String,
    pub namespace: Namespace,
    /// Tag key of the dropped entry (`*` when it collided with a seeded entry).
    pub tag: String,
    pub global: AttrConfig,
    pub specific: AttrConfig,
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ns}:{tag}[{attr}] will be dropped because it conflicts with global {ns}:{global}[{attr}]",
            ns = self.namespace,
            tag = self.tag,
            attr = self.attribute,
            global = GLOBAL_TAG,
        )
    }
}

#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub attributes: AttributeTable,
    pub warnings: Vec<ConflictWarning>,
}

/// Owns the attribute table while attribute bags are merged into it.
#[derive(Debug)]
pub struct AttributeTableBuilder<'a> {
    rules: &'a FrameworkRules,
    overrides: &'a OverrideTable,
    policy: ConflictPolicy,
    table: AttributeTable,
    /// (attribute, namespace) pairs whose global entry came from the seeds.
    seeded: BTreeSet<(String, Namespace)>,
    warnings: Vec<ConflictWarning>,
}

impl<'a> AttributeTableBuilder<'a> {
    /// New builder, pre-populated with the framework's seed entries.
    pub fn new(
        rules: &'a FrameworkRules,
        overrides: &'a OverrideTable,
        policy: ConflictPolicy,
    ) -> Self {
        let mut builder = Self {
            rules,
            overrides,
            policy,
            table: AttributeTable::new(),
            seeded: BTreeSet::new(),
            warnings: Vec::new(),
        };
        for seed in rules.seeds {
            builder
                .tags_mut(seed.attribute, seed.namespace)
                .insert(GLOBAL_TAG.to_string(), seed.config());
            builder
                .seeded
                .insert((seed.attribute.to_string(), seed.namespace));
        }
        builder
    }

    /// Merge every property signature of one attribute bag, in declaration order.
    pub fn merge_record<N: SyntaxNode>(&mut self, record: &TagRecord<N>) -> Result<()> {
        for member in record.node.children() {
            if member.kind() != NodeKind::PropertySignature {
                continue;
            }
            if let Some((attribute, config)) = self.classify(&member, record)? {
                self.insert(&attribute, record.namespace, record.table_tag(), config)?;
            }
        }
        Ok(())
    }

    /// Canonical attribute name and config for one property, `None` if skipped.
    fn classify<N: SyntaxNode>(
        &self,
        property: &N,
        record: &TagRecord<N>,
    ) -> Result<Option<(String, AttrConfig)>> {
        let Some(raw_name) = property.name() else {
            return Ok(None);
        };
        let attribute = self.rules.attribute_name(&raw_name);
        if self.rules.is_framework_attribute(&attribute) {
            return Ok(None);
        }

        let qualified_tag = record.qualified_tag();
        let Some(shape) = property.type_shape() else {
            bail!(
                "Property {}[{}] has no declared type",
                qualified_tag,
                raw_name
            );
        };
        let kinds = shape.kinds();
        let boolean = kinds.contains(&TypeKind::BooleanKeyword);
        // Attributes that also accept booleans keep their empty value.
        let redundant_if_empty_default = !boolean
            && (kinds.contains(&TypeKind::StringKeyword)
                || kinds.contains(&TypeKind::NumberKeyword));

        let rule = self.overrides.lookup(&attribute, &qualified_tag)?;
        let config = AttrConfig {
            boolean: flag(boolean),
            case_insensitive: rule.and_then(|r| r.is_case_insensitive).and_then(flag),
            collapse: rule.and_then(|r| r.is_collapsible).and_then(flag),
            default_value: rule
                .and_then(|r| r.default_value.clone())
                .filter(|v| !v.is_empty()),
            redundant_if_empty: flag(
                rule.and_then(|r| r.is_redundant_if_empty)
                    .unwrap_or(redundant_if_empty_default),
            ),
            trim: rule.and_then(|r| r.is_trimmable).and_then(flag),
        };
        Ok(Some((attribute, config)))
    }

    /// File `config` under `attributes[attribute][namespace][tag]`.
    ///
    /// Fails on a second declaration at the same path. A tag-specific entry
    /// arriving after a global one, or a global declaration colliding with a
    /// seed, goes through the conflict policy and is never stored.
    pub fn insert(
        &mut self,
        attribute: &str,
        namespace: Namespace,
        tag: &str,
        config: AttrConfig,
    ) -> Result<()> {
        let is_seeded = self
            .seeded
            .contains(&(attribute.to_string(), namespace));
        let tags = self.tags_mut(attribute, namespace);
        let existing = tags.get(tag).cloned();
        let global = tags.get(GLOBAL_TAG).cloned();

        match (existing, global) {
            (Some(seed), _) if tag == GLOBAL_TAG && is_seeded => {
                self.resolve_conflict(attribute, namespace, tag, seed, config)
            }
            (Some(_), _) => bail!(
                "Duplicate tag-attribute combination: {}:{}[{}]",
                namespace,
                tag,
                attribute
            ),
            (None, Some(global)) => {
                self.resolve_conflict(attribute, namespace, tag, global, config)
            }
            (None, None) => {
                self.tags_mut(attribute, namespace)
                    .insert(tag.to_string(), config);
                Ok(())
            }
        }
    }

    fn resolve_conflict(
        &mut self,
        attribute: &str,
        namespace: Namespace,
        tag: &str,
        global: AttrConfig,
        specific: AttrConfig,
    ) -> Result<()> {
        if global == specific {
            return Ok(());
        }
        match self.policy {
            ConflictPolicy::Strict => bail!(
                "Tag \"{tag}\" attribute \"{attribute}\" in namespace {namespace} conflicts with global \"{attribute}\" attribute: {namespace}:{g}[{attribute}] = {global}, {namespace}:{tag}[{attribute}] = {specific}",
                g = GLOBAL_TAG,
            ),
            ConflictPolicy::Lenient => {
                self.warnings.push(ConflictWarning {
                    attribute: attribute.to_string(),
                    namespace,
                    tag: tag.to_string(),
                    global,
                    specific,
                });
                Ok(())
            }
        }
    }

    /// Tag map for (attribute, namespace), creating both namespaces on first use.
    fn tags_mut(&mut self, attribute: &str, namespace: Namespace) -> &mut TagConfigs {
        self.table
            .entry(attribute.to_string())
            .or_insert_with(|| {
                Namespace::ALL
                    .into_iter()
                    .map(|ns| (ns, TagConfigs::new()))
                    .collect::<BTreeMap<_, _>>()
            })
            .entry(namespace)
            .or_default()
    }

    pub fn finish(self) -> MergeOutcome {
        MergeOutcome {
            attributes: self.table,
            warnings: self.warnings,
        }
    }
}

/// Merge all attribute bags, in order, into a fresh table.
pub fn build_attribute_table<N: SyntaxNode>(
    records: &[TagRecord<N>],
    rules: &FrameworkRules,
    overrides: &OverrideTable,
    policy: ConflictPolicy,
) -> Result<MergeOutcome> {
    let mut builder = AttributeTableBuilder::new(rules, overrides, policy);
    for record in records {
        builder.merge_record(record)?;
    }
    Ok(builder.finish())
}
