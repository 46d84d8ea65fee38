//! Paramscan - parameter name extraction for HTML and JavaScript
//!
//! Paramscan is a CLI tool and library that pulls candidate parameter names
//! (form fields, link targets, script variables and function parameters)
//! out of batches of HTML and JavaScript files, for use as fuzzing
//! wordlists.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (normalization, HTML and JS extractors, batching)
//! - `output`: JSON result files

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
