use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    let error = if config_path.exists() {
        Some(format!("{} already exists", CONFIG_FILE_NAME))
    } else {
        fs::write(config_path, format!("{}\n", default_config_json()?))
            .with_context(|| format!("Failed to write file: {}", CONFIG_FILE_NAME))?;
        None
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { error }),
        fail_on_empty: false,
    })
}
