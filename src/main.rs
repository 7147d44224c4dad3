mod app;

use clap::Parser;
use std::process::ExitCode;

use crate::app::cli::Cli;

/// Exit status for operational failures, distinct from a negative result.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match app::run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
