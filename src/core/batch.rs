//! Applying one extractor to a file or a whole directory.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{
    JsTokens, ParameterSet, extract_html_parameters, extract_js_tokens,
    file_scanner::{ScanOptions, scan_files},
};

/// Result type that can absorb per-file results.
pub trait Accumulate: Default {
    fn accumulate(&mut self, other: Self);
    fn count(&self) -> usize;
}

impl Accumulate for ParameterSet {
    fn accumulate(&mut self, other: Self) {
        self.extend(other);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl Accumulate for JsTokens {
    fn accumulate(&mut self, other: Self) {
        self.merge(other);
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// A single-document extractor plus the file suffixes it accepts.
pub trait Extractor {
    type Output: Accumulate;

    fn extensions(&self) -> &[String];
    fn extract(&self, source: &str) -> Self::Output;
}

pub struct HtmlExtractor {
    pub extensions: Vec<String>,
}

impl Extractor for HtmlExtractor {
    type Output = ParameterSet;

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn extract(&self, source: &str) -> ParameterSet {
        extract_html_parameters(source)
    }
}

pub struct JsExtractor {
    pub extensions: Vec<String>,
}

impl Extractor for JsExtractor {
    type Output = JsTokens;

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn extract(&self, source: &str) -> JsTokens {
        extract_js_tokens(source)
    }
}

#[derive(Debug)]
pub struct BatchResult<T> {
    pub output: T,
    pub files_processed: usize,
}

/// Run `extractor` over `input`.
///
/// A file is extracted as-is, whatever its suffix. A directory is
/// enumerated with `options` and every matching file is extracted and
/// unioned into one result. `on_file` is called before each file is read.
///
/// Any other path is rejected before anything is read. A file that cannot
/// be read or is not valid UTF-8 aborts the whole batch.
pub fn run_batch<E: Extractor>(
    extractor: &E,
    input: &Path,
    options: &ScanOptions,
    mut on_file: impl FnMut(&Path),
) -> Result<BatchResult<E::Output>> {
    let files = if input.is_file() {
        vec![input.to_path_buf()]
    } else if input.is_dir() {
        scan_files(input, extractor.extensions(), options)?
    } else {
        bail!("Invalid file or directory path: {}", input.display());
    };

    let mut output = E::Output::default();
    for file in &files {
        on_file(file);
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?;
        let extracted = extractor.extract(&source);
        log::debug!("{}: {} result(s)", file.display(), extracted.count());
        output.accumulate(extracted);
    }

    Ok(BatchResult {
        output,
        files_processed: files.len(),
    })
}
