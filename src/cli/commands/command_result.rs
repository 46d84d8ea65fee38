use std::path::PathBuf;

use crate::core::{JsTokens, ParameterSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Html,
    Js,
    Combine,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Html(HtmlSummary),
    Js(JsSummary),
    Combine(CombineSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct HtmlSummary {
    pub parameters: ParameterSet,
    pub files_processed: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct JsSummary {
    pub tokens: JsTokens,
    pub files_processed: usize,
    pub output_path: PathBuf,
}

#[derive(Debug)]
pub struct CombineSummary {
    pub urls: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    /// None when the file was written, otherwise the reason it was not.
    pub error: Option<String>,
}

/// Result of running a paramscan command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, an empty extraction maps to exit status 1.
    pub fail_on_empty: bool,
}

impl CommandResult {
    pub fn kind(&self) -> CommandKind {
        match self.summary {
            CommandSummary::Html(_) => CommandKind::Html,
            CommandSummary::Js(_) => CommandKind::Js,
            CommandSummary::Combine(_) => CommandKind::Combine,
            CommandSummary::Init(_) => CommandKind::Init,
        }
    }

    /// Number of names or URLs the command produced.
    pub fn result_count(&self) -> usize {
        match &self.summary {
            CommandSummary::Html(summary) => summary.parameters.len(),
            CommandSummary::Js(summary) => summary.tokens.len(),
            CommandSummary::Combine(summary) => summary.urls.len(),
            CommandSummary::Init(_) => 0,
        }
    }
}
