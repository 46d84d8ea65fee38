//! Extraction engine.
//!
//! - `normalize`: canonical form for HTML-derived parameter names
//! - `html`: attribute extraction from markup
//! - `javascript`: layered regex scans over script text
//! - `batch`: per-file and per-directory aggregation
//! - `file_scanner`: directory enumeration filtered by suffix
//! - `combine`: domain x path URL expansion

use std::collections::BTreeSet;

pub mod batch;
pub mod combine;
pub mod file_scanner;
pub mod html;
pub mod javascript;
mod normalize;

pub use batch::{Accumulate, BatchResult, Extractor, HtmlExtractor, JsExtractor, run_batch};
pub use file_scanner::{ScanOptions, scan_files};
pub use html::extract_html_parameters;
pub use javascript::{JsTokens, extract_js_tokens};
pub use normalize::normalize;

/// Deduplicated parameter names. Ordered so serialized output is stable.
pub type ParameterSet = BTreeSet<String>;
