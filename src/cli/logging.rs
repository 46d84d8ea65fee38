use log::{LevelFilter, SetLoggerError};

/// Set up `env_logger`.
///
/// `RUST_LOG` is honoured; `verbose` raises this crate to `debug`. The HTML
/// tokenizer's own logging is kept quiet either way. Fails if a logger is
/// already installed in this process.
pub fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    builder.filter_module("html5ever", LevelFilter::Error);
    if verbose {
        builder.filter_module("paramscan", LevelFilter::Debug);
    }
    builder.format_timestamp(None);

    builder.try_init()?;
    Ok(())
}
