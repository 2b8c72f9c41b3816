use std::fmt;

use serde::{Deserialize, Serialize};

/// Serialization hints for one attribute on one (namespace, tag).
///
/// Every field is optional and only `true` flags are ever stored, so the
/// emitted JSON contains just the hints that apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttrConfig {
    /// Presence-only attribute (`<input disabled>`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
    /// Whitespace runs may be collapsed to a single space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse: Option<bool>,
    /// Value implied when the attribute is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// `attr=""` is equivalent to leaving the attribute out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redundant_if_empty: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
}

/// `true` becomes `Some(true)`, anything else is left unset.
pub fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

impl AttrConfig {
    pub fn boolean() -> Self {
        Self {
            boolean: Some(true),
            ..Default::default()
        }
    }
}

impl fmt::Display for AttrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
