use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, REACT_DECLARATIONS};

/// `REACT_DECLARATIONS` with an anchor-specific `hidden` that disagrees with the global one.
fn conflicting_declarations() -> String {
    REACT_DECLARATIONS.replace(
        "download?: any;",
        "download?: any;\n        hidden?: string | undefined;",
    )
}

#[test]
fn test_generate_end_to_end() -> Result<()> {
    let test = CliTest::with_declarations(REACT_DECLARATIONS)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 6 attributes for 2 html and 1 svg tags -> data/data.json

    ----- stderr -----
    ");

    let data: Value = serde_json::from_str(&test.read_file("data/data.json")?)?;
    assert_eq!(data["tags"], json!({ "html": ["a", "div"], "svg": ["svg"] }));
    assert_eq!(
        data["attributes"]["class"],
        json!({
            "html": { "*": { "redundantIfEmpty": true } },
            "svg": { "*": { "redundantIfEmpty": true } }
        })
    );
    assert_eq!(
        data["attributes"]["hidden"],
        json!({ "html": { "*": { "boolean": true } }, "svg": {} })
    );
    assert_eq!(
        data["attributes"]["href"],
        json!({ "html": { "a": { "redundantIfEmpty": true } }, "svg": {} })
    );
    assert_eq!(
        data["attributes"]["alt"],
        json!({ "html": { "*": {} }, "svg": { "*": {} } })
    );
    assert_eq!(
        data["attributes"]["crossorigin"],
        json!({ "html": { "*": { "boolean": true } }, "svg": { "*": {} } })
    );

    Ok(())
}

#[test]
fn test_generate_is_deterministic() -> Result<()> {
    let test = CliTest::with_declarations(REACT_DECLARATIONS)?;

    assert!(test.generate_command().status()?.success());
    let first = test.read_file("data/data.json")?;
    assert!(test.generate_command().status()?.success());
    let second = test.read_file("data/data.json")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_generate_applies_overrides() -> Result<()> {
    let test = CliTest::with_declarations(REACT_DECLARATIONS)?;
    test.write_file(
        "gen/attrs.yaml",
        r#"
class:
  - tags: ["html:*"]
    isCollapsible: true
    isTrimmable: true
href:
  - tags: ["html:a"]
    isTrimmable: true
"#,
    )?;

    let output = test
        .generate_command()
        .args(["--overrides", "gen/attrs.yaml", "--stdout"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stderr)?, "");
    let data: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        data["attributes"]["class"]["html"]["*"],
        json!({ "collapse": true, "redundantIfEmpty": true, "trim": true })
    );
    assert_eq!(
        data["attributes"]["class"]["svg"]["*"],
        json!({ "redundantIfEmpty": true })
    );
    assert_eq!(
        data["attributes"]["href"]["html"]["a"],
        json!({ "redundantIfEmpty": true, "trim": true })
    );
    assert!(!test.root().join("data").exists());

    Ok(())
}

#[test]
fn test_ambiguous_override_aborts() -> Result<()> {
    let test = CliTest::with_declarations(REACT_DECLARATIONS)?;
    test.write_file(
        "attrs.json",
        r#"{
  "href": [
    { "tags": ["html:a"], "isTrimmable": true },
    { "tags": ["html:a"], "isCaseInsensitive": true }
  ]
}"#,
    )?;

    assert_cmd_snapshot!(test.generate_command().args(["--overrides", "attrs.json"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Tag-attribute combination html:a[href] has multiple configurations
    ");
    assert!(!test.root().join("data/data.json").exists());

    Ok(())
}

#[test]
fn test_lenient_conflict_warns_and_drops() -> Result<()> {
    let test = CliTest::with_declarations(&conflicting_declarations())?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 6 attributes for 2 html and 1 svg tags -> data/data.json
    1 conflicting tag attribute(s) dropped in favour of global attributes

    ----- stderr -----
    warning: html:a[hidden] will be dropped because it conflicts with global html:*[hidden]
    ");

    let data: Value = serde_json::from_str(&test.read_file("data/data.json")?)?;
    assert_eq!(
        data["attributes"]["hidden"]["html"],
        json!({ "*": { "boolean": true } })
    );

    Ok(())
}

#[test]
fn test_fail_on_warnings_exits_with_failure() -> Result<()> {
    let test = CliTest::with_declarations(&conflicting_declarations())?;

    assert_cmd_snapshot!(test.generate_command().arg("--fail-on-warnings"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ Generated 6 attributes for 2 html and 1 svg tags -> data/data.json
    1 conflicting tag attribute(s) dropped in favour of global attributes

    ----- stderr -----
    warning: html:a[hidden] will be dropped because it conflicts with global html:*[hidden]
    ");
    // The data is still written; only the status changes.
    assert!(test.root().join("data/data.json").exists());

    Ok(())
}

#[test]
fn test_strict_conflict_aborts_without_output() -> Result<()> {
    let test = CliTest::with_declarations(&conflicting_declarations())?;
    test.write_file("data/data.json", "previous")?;

    assert_cmd_snapshot!(test.generate_command().args(["--policy", "strict"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Tag "a" attribute "hidden" in namespace html conflicts with global "hidden" attribute: html:*[hidden] = {"boolean":true}, html:a[hidden] = {"redundantIfEmpty":true}
    "#);
    assert_eq!(test.read_file("data/data.json")?, "previous");

    Ok(())
}

#[test]
fn test_verbose_prints_conflicting_configs() -> Result<()> {
    let test = CliTest::with_declarations(&conflicting_declarations())?;

    assert_cmd_snapshot!(test.generate_command().arg("-v"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 6 attributes for 2 html and 1 svg tags -> data/data.json
    1 conflicting tag attribute(s) dropped in favour of global attributes

    ----- stderr -----
    Note: No .attrgenrc.json found, using default configuration
    warning: html:a[hidden] will be dropped because it conflicts with global html:*[hidden]
      global html:*[hidden] = {"boolean":true}
      dropped html:a[hidden] = {"redundantIfEmpty":true}
    "#);

    Ok(())
}

#[test]
fn test_malformed_intrinsic_element_aborts() -> Result<()> {
    let test = CliTest::with_declarations(&REACT_DECLARATIONS.replace(
        "svg: React.SVGProps<SVGSVGElement>;",
        "svg: { children?: string };",
    ))?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: IntrinsicElements.svg is not a type reference; the declaration format may have changed
    ");

    Ok(())
}

#[test]
fn test_missing_declarations_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    // The message carries the absolute temp path, so only its prefix is stable.
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to read declaration file"));

    Ok(())
}
