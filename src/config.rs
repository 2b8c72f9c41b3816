use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::ConflictPolicy;

pub const CONFIG_FILE_NAME: &str = ".attrgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// React type declarations to read.
    #[serde(default = "default_declarations")]
    pub declarations: String,
    /// Override table (YAML or JSON). No overrides when unset.
    #[serde(default)]
    pub overrides: Option<String>,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
    /// Exit with a failure status when conflicts were dropped.
    #[serde(default)]
    pub fail_on_warnings: bool,
}

fn default_declarations() -> String {
    "node_modules/@types/react/index.d.ts".to_string()
}

fn default_output() -> String {
    "data/data.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            declarations: default_declarations(),
            overrides: None,
            output: default_output(),
            conflict_policy: ConflictPolicy::default(),
            fail_on_warnings: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.declarations.trim().is_empty() {
            bail!("'declarations' must not be empty");
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }
        if let Some(overrides) = &self.overrides
            && overrides.trim().is_empty()
        {
            bail!("'overrides' must not be empty when set");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
