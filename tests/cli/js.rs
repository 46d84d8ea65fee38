use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout, string_array};

#[test]
fn test_single_file() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        r#"
  let count = 0;
  const userName = "x";
  const { host, port } = config;
  function greet(name, age) {
      return name;
  }
  "#,
    )?;

    let output = test.js_command("app.js", "tokens.json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = test.read_json("tokens.json")?;
    assert_eq!(
        string_array(&json, "variables"),
        vec!["count", "host", "port", "userName"]
    );
    assert_eq!(
        string_array(&json, "function_parameters"),
        vec!["age", "name"]
    );

    Ok(())
}

#[test]
fn test_directory_union_keeps_categories_apart() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "var token = 1;")?;
    test.write_file("src/b.js", "function send(token, body) {}")?;
    test.write_file("src/c.ts", "let skipped = 1;")?;

    let output = test.js_command("src", "out.json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(!out.contains("c.ts"));
    assert!(out.contains("Extracted 1 variable and 2 function parameters from 2 files"));

    let json = test.read_json("out.json")?;
    assert_eq!(string_array(&json, "variables"), vec!["token"]);
    assert_eq!(
        string_array(&json, "function_parameters"),
        vec!["body", "token"]
    );

    Ok(())
}

#[test]
fn test_verbose_lists_tokens() -> Result<()> {
    let test = CliTest::with_file("app.js", "const add = (a, b) => a + b;")?;

    let output = test
        .js_command("app.js", "out.json")
        .arg("--verbose")
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Variables (1):"));
    assert!(out.contains("  add"));
    assert!(out.contains("  a, b"));

    Ok(())
}

#[test]
fn test_undecodable_file_aborts() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/good.js", "let ok = 1;")?;
    std::fs::write(test.root().join("src/zbad.js"), [0xff, 0xfe, 0x80])?;

    let output = test.js_command("src", "out.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_invalid_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.js_command("nope", "out.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}
