use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the
/// scanned directory.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// How a directory is enumerated.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories instead of listing direct children only.
    pub recursive: bool,
    /// Glob patterns or literal paths to leave out.
    pub ignores: Vec<String>,
}

/// List files under `dir` whose name ends with `.<ext>` for one of
/// `extensions`, sorted by path.
pub fn scan_files(dir: &Path, extensions: &[String], options: &ScanOptions) -> Result<Vec<PathBuf>> {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &options.ignores {
        if is_glob_pattern(p) {
            let pattern = Pattern::new(p)
                .with_context(|| format!("Invalid ignore pattern: \"{}\"", p))?;
            glob_patterns.push(pattern);
        } else {
            literal_ignore_paths.push(dir.join(p));
        }
    }

    let mut walker = WalkDir::new(dir).min_depth(1);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Cannot access path under {}", dir.display()))?;
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Exact, case-sensitive suffix match on the file name.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext)))
}
