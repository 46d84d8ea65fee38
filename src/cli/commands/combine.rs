use anyhow::Result;

use super::super::args::CombineArgs;
use super::{CombineSummary, CommandResult, CommandSummary};
use crate::core::combine::{combine_urls, read_lines};

pub fn combine(args: CombineArgs) -> Result<CommandResult> {
    let domains = read_lines(&args.domains_file)?;
    let paths = read_lines(&args.paths_file)?;

    Ok(CommandResult {
        summary: CommandSummary::Combine(CombineSummary {
            urls: combine_urls(&domains, &paths, &args.scheme),
        }),
        fail_on_empty: false,
    })
}
