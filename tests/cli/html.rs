use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout, string_array};

#[test]
fn test_single_file() -> Result<()> {
    let test = CliTest::with_file(
        "login.html",
        r#"
  <form action="/submit.do" method="post">
      <input name="q" id="search">
      <input type="hidden" name="csrf" value="abc123">
      <button id="go">Go</button>
  </form>
  <script src="/js/app.js"></script>
  "#,
    )?;

    let output = test.html_command("login.html", "params.json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Processing:"));
    assert!(out.contains("Output saved to params.json"));

    let json = test.read_json("params.json")?;
    assert_eq!(
        string_array(&json, "parameters"),
        vec!["abc123", "csrf", "go", "js/app", "q", "search", "submit"]
    );

    Ok(())
}

#[test]
fn test_directory_union() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/a.html", r#"<input name="a">"#)?;
    test.write_file("site/b.html", r#"<input name="b">"#)?;
    test.write_file("site/readme.txt", r#"<input name="c">"#)?;

    let output = test.html_command("site", "out.json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("a.html"));
    assert!(out.contains("b.html"));
    assert!(!out.contains("readme.txt"));
    assert!(out.contains("Extracted 2 parameters from 2 files"));

    let json = test.read_json("out.json")?;
    assert_eq!(string_array(&json, "parameters"), vec!["a", "b"]);

    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/notes.md", "nothing here")?;

    let output = test.html_command("site", "out.json").output()?;

    assert!(output.status.success());
    let json = test.read_json("out.json")?;
    assert!(string_array(&json, "parameters").is_empty());

    Ok(())
}

#[test]
fn test_fail_on_empty() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/empty.html", "<p>no forms</p>")?;

    let output = test
        .html_command("site", "out.json")
        .arg("--fail-on-empty")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("nothing was extracted"));

    Ok(())
}

#[test]
fn test_invalid_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.html_command("missing", "out.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid file or directory path"));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_recursive_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/index.html", r#"<input name="top">"#)?;
    test.write_file("site/nested/page.html", r#"<input name="deep">"#)?;

    test.html_command("site", "flat.json").output()?;
    let flat = test.read_json("flat.json")?;
    assert_eq!(string_array(&flat, "parameters"), vec!["top"]);

    let output = test
        .html_command("site", "deep.json")
        .arg("--recursive")
        .output()?;
    assert!(output.status.success());
    let deep = test.read_json("deep.json")?;
    assert_eq!(string_array(&deep, "parameters"), vec!["deep", "top"]);

    Ok(())
}

#[test]
fn test_config_ignores_and_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".paramscanrc.json",
        r#"{
         "recursive": true,
         "ignores": ["**/vendor/**"],
         "htmlExtensions": ["html", "htm"]
     }"#,
    )?;
    test.write_file("site/index.htm", r#"<input name="legacy">"#)?;
    test.write_file("site/app/form.html", r#"<input name="modern">"#)?;
    test.write_file("site/vendor/lib.html", r#"<input name="vendored">"#)?;

    let output = test.html_command("site", "out.json").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json = test.read_json("out.json")?;
    assert_eq!(string_array(&json, "parameters"), vec!["legacy", "modern"]);

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".paramscanrc.json", "{ broken")?;
    test.write_file("page.html", r#"<input name="x">"#)?;

    let output = test.html_command("page.html", "out.json").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}
