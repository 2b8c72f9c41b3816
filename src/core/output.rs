use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::data::GeneratedData;

/// Serialize with 2-space indentation and a trailing newline.
pub fn to_json(data: &GeneratedData) -> Result<String> {
    let content = serde_json::to_string_pretty(data).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

/// Write the artifact to `path`.
///
/// The JSON goes to a sibling temporary file first and is renamed into
/// place, so an existing artifact is never left half-written.
pub fn write_output(path: &Path, data: &GeneratedData) -> Result<()> {
    let content = to_json(data)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write file: {}", temp_path.display()))?;
    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).with_context(|| format!("Failed to write file: {}", path.display()));
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "data.json".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}
