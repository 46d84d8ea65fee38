use std::process::ExitCode;

use clap::Parser;
use paramscan::cli::{Arguments, ExitStatus, init_logger};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = init_logger(args.verbose()) {
        eprintln!("Error: failed to initialize logger: {}", err);
        return ExitStatus::Error.into();
    }

    match paramscan::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
