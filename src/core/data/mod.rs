//! Data types produced by the generator.
//!
//! ## Module Structure
//!
//! - `attr_config`: AttrConfig, the per-(namespace, tag) attribute hints
//! - `tables`: Namespace, TagTable, AttributeTable and the GeneratedData artifact

pub mod attr_config;
pub mod tables;

pub use attr_config::{AttrConfig, flag};
pub use tables::{
    AttributeTable, GLOBAL_TAG, GeneratedData, Namespace, TagConfigs, TagTable, empty_tag_table,
};
