use std::{fs, path::Path};

use anyhow::{Context, Result};

pub const DEFAULT_SCHEME: &str = "https";

/// Cross every domain with every path, domains outermost.
///
/// Paths are appended verbatim, so they are expected to carry their own
/// leading `/`.
pub fn combine_urls(domains: &[String], paths: &[String], scheme: &str) -> Vec<String> {
    domains
        .iter()
        .flat_map(|domain| {
            paths
                .iter()
                .map(move |path| format!("{}://{}{}", scheme, domain, path))
        })
        .collect()
}

/// Read a line-oriented list, trimming each line and dropping blank ones.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
