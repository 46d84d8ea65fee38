use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout, string_array};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .paramscanrc.json"));

    let content = test.read_file(".paramscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(string_array(&parsed, "htmlExtensions"), vec!["html"]);
    assert_eq!(string_array(&parsed, "jsExtensions"), vec!["js"]);
    assert_eq!(parsed["recursive"], Value::Bool(false));
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".paramscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".paramscanrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("site/index.html", r#"<input name="q">"#)?;

    let output = test.html_command("site", "out.json").output()?;
    assert!(
        output.status.success(),
        "Html command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
