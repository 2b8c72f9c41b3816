use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::overrides::OverrideTable;

/// Load an override table, choosing the format by file extension.
///
/// `.yaml` / `.yml` are read as YAML, anything else as JSON.
pub fn load_overrides(path: &Path) -> Result<OverrideTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read override table: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let table = if is_yaml {
        OverrideTable::from_yaml_str(&content)
    } else {
        OverrideTable::from_json_str(&content)
    };
    table.with_context(|| format!("Invalid override table: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_yaml_and_json() {
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("attrs.yaml");
        fs::write(&yaml, "class:\n  - tags: [\"html:*\"]\n    isTrimmable: true\n").unwrap();
        let json = dir.path().join("attrs.json");
        fs::write(&json, r#"{"class": [{"tags": ["html:*"], "isTrimmable": true}]}"#).unwrap();

        let from_yaml = load_overrides(&yaml).unwrap();
        let from_json = load_overrides(&json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(
            from_yaml.lookup("class", "html:*").unwrap().unwrap().is_trimmable,
            Some(true)
        );
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("attrs.json");
        fs::write(&path, "class:\n  - tags: []\n").unwrap();

        let err = load_overrides(&path).unwrap_err();
        assert!(err.to_string().contains("attrs.json"));
    }
}
