//! Output formatting and printing for CLI commands.
//!
//! Kept apart from the extraction engine so paramscan can be used as a
//! library without anything printing.

use std::{
    collections::BTreeSet,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CombineSummary, CommandResult, CommandSummary, HtmlSummary, InitSummary, JsSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Announce the file about to be extracted.
pub fn print_processing(path: &Path) {
    println!("{} {}", "Processing:".cyan().bold(), path.display());
}

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Html(summary) => print_html_to(summary, verbose, stdout),
        CommandSummary::Js(summary) => print_js_to(summary, verbose, stdout),
        CommandSummary::Combine(summary) => print_combine_to(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }

    if result.fail_on_empty && result.result_count() == 0 {
        eprintln!(
            "{} nothing was extracted (--fail-on-empty)",
            "warning:".bold().yellow()
        );
    }
}

fn print_html_to<W: Write>(summary: &HtmlSummary, verbose: bool, writer: &mut W) {
    if verbose {
        print_list_to("Parameters", &summary.parameters, writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {}",
            summary.parameters.len(),
            plural(summary.parameters.len(), "parameter", "parameters"),
            summary.files_processed,
            plural(summary.files_processed, "file", "files")
        )
        .green()
    );
    print_saved_to(&summary.output_path, writer);
}

fn print_js_to<W: Write>(summary: &JsSummary, verbose: bool, writer: &mut W) {
    let variables = summary.tokens.variables.len();
    let function_parameters = summary.tokens.function_parameters.len();

    if verbose {
        print_list_to("Variables", &summary.tokens.variables, writer);
        print_list_to(
            "Function parameters",
            &summary.tokens.function_parameters,
            writer,
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} and {} function {} from {} {}",
            variables,
            plural(variables, "variable", "variables"),
            function_parameters,
            plural(function_parameters, "parameter", "parameters"),
            summary.files_processed,
            plural(summary.files_processed, "file", "files")
        )
        .green()
    );
    print_saved_to(&summary.output_path, writer);
}

fn print_combine_to<W: Write>(summary: &CombineSummary, writer: &mut W) {
    for url in &summary.urls {
        let _ = writeln!(writer, "{}", url);
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", FAILURE_MARK.red(), error.red()),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}

fn print_list_to<W: Write>(label: &str, items: &BTreeSet<String>, writer: &mut W) {
    let _ = writeln!(writer, "{} ({}):", label.bold(), items.len());
    for item in items {
        let _ = writeln!(writer, "  {}", item);
    }
}

fn print_saved_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        "Output saved to".dimmed(),
        path.display()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
