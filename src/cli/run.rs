//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command's summary
//! - `Err` if the command fails (e.g., invalid input path, unreadable file)

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        combine::combine,
        extract::{html, js},
        init::init,
    },
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Html(args)) => html(args),
        Some(Command::Js(args)) => js(args),
        Some(Command::Combine(args)) => combine(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
