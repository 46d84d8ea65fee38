//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `html`: Extract parameter names from HTML files
//! - `js`: Extract variable and function parameter names from JavaScript files
//! - `combine`: Cross a domain list with a path list into URLs
//! - `init`: Initialize paramscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::combine::DEFAULT_SCHEME;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Html(args)) | Some(Command::Js(args)) => args.verbose,
            Some(Command::Combine(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by the extraction commands.
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to a file or a directory containing files to scan
    pub path: PathBuf,

    /// Path of the JSON file results are written to
    pub output_json: PathBuf,

    /// Descend into subdirectories (overrides config file)
    #[arg(short, long)]
    pub recursive: bool,

    /// Exit with status 1 when nothing was extracted
    #[arg(long)]
    pub fail_on_empty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CombineArgs {
    /// File with one domain per line
    pub domains_file: PathBuf,

    /// File with one path per line
    pub paths_file: PathBuf,

    /// URL scheme prepended to every domain
    #[arg(long, env = "PARAMSCAN_SCHEME", default_value = DEFAULT_SCHEME)]
    pub scheme: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract parameter names from HTML attributes
    Html(ExtractArgs),
    /// Extract variable and function parameter names from JavaScript
    Js(ExtractArgs),
    /// Print every domain combined with every path as a URL
    Combine(CombineArgs),
    /// Initialize a new .paramscanrc.json configuration file
    Init,
}
