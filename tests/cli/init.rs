use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .attrgenrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".attrgenrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(
        parsed["declarations"],
        "node_modules/@types/react/index.d.ts"
    );
    assert_eq!(parsed["output"], "data/data.json");
    assert_eq!(parsed["conflictPolicy"], "lenient");
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".attrgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .attrgenrc.json already exists
    ");
    assert_eq!(test.read_file(".attrgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_generate_uses_config_written_by_init() -> Result<()> {
    let test = CliTest::with_declarations(crate::REACT_DECLARATIONS)?;

    let init = test.command().arg("init").output()?;
    assert!(init.status.success());

    assert_cmd_snapshot!(test.generate_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 6 attributes for 2 html and 1 svg tags -> data/data.json

    ----- stderr -----
    ");

    Ok(())
}
