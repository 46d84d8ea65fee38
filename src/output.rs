//! JSON result files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{JsTokens, ParameterSet};

#[derive(Debug, Serialize)]
struct HtmlReport<'a> {
    parameters: &'a ParameterSet,
}

/// Write `{"parameters": [...]}`.
pub fn write_html_report(path: &Path, parameters: &ParameterSet) -> Result<()> {
    write_json(path, &HtmlReport { parameters })
}

/// Write `{"variables": [...], "function_parameters": [...]}`.
pub fn write_js_report(path: &Path, tokens: &JsTokens) -> Result<()> {
    write_json(path, tokens)
}

/// Save `value` as pretty JSON with a trailing newline, creating parent
/// directories as needed.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
