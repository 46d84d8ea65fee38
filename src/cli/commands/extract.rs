use std::env;

use anyhow::{Context, Result};

use super::super::{args::ExtractArgs, report::print_processing};
use super::{CommandResult, CommandSummary, HtmlSummary, JsSummary};
use crate::{
    config::{Config, load_config},
    core::{HtmlExtractor, JsExtractor, ScanOptions, run_batch},
    output::{write_html_report, write_js_report},
};

fn load(args: &ExtractArgs) -> Result<(Config, ScanOptions)> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd)?.config;
    let options = ScanOptions {
        recursive: args.recursive || config.recursive,
        ignores: config.ignores.clone(),
    };
    Ok((config, options))
}

pub fn html(args: ExtractArgs) -> Result<CommandResult> {
    let (config, options) = load(&args)?;
    let extractor = HtmlExtractor {
        extensions: config.html_extensions,
    };

    let batch = run_batch(&extractor, &args.path, &options, print_processing)?;
    write_html_report(&args.output_json, &batch.output)?;

    Ok(CommandResult {
        summary: CommandSummary::Html(HtmlSummary {
            parameters: batch.output,
            files_processed: batch.files_processed,
            output_path: args.output_json,
        }),
        fail_on_empty: args.fail_on_empty,
    })
}

pub fn js(args: ExtractArgs) -> Result<CommandResult> {
    let (config, options) = load(&args)?;
    let extractor = JsExtractor {
        extensions: config.js_extensions,
    };

    let batch = run_batch(&extractor, &args.path, &options, print_processing)?;
    write_js_report(&args.output_json, &batch.output)?;

    Ok(CommandResult {
        summary: CommandSummary::Js(JsSummary {
            tokens: batch.output,
            files_processed: batch.files_processed,
            output_path: args.output_json,
        }),
        fail_on_empty: args.fail_on_empty,
    })
}
