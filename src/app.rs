// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{bail, Result};

use self::cli::{Cli, Commands};
use self::config::{load_settings, resolve_config};
use self::formatter::OutputGenerator;
use self::models::Outcome;
use self::scanner::Scanner;

/// Runs the parsed command and reports whether the snippets are included.
pub fn run(cli: Cli) -> Result<Outcome> {
    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::IncludesSnippets(args) => {
            let config = resolve_config(args, settings)?;

            if !config.conf.exists() {
                bail!("nginx config not found: {}", config.conf.display());
            }

            let scanner = Scanner::new(&config);
            let report = scanner.scan_file(&config.conf)?;
            let outcome = report.outcome();
            log::info!(
                "{} includes {}/*.conf: {}",
                config.conf.display(),
                config.snippets_dir.trim_end_matches('/'),
                outcome.token()
            );

            if config.explain {
                println!(
                    "{}",
                    OutputGenerator::generate_explanation(&report, scanner.targets())
                );
            }
            if config.verbose {
                println!("{}", OutputGenerator::generate_token(outcome));
            }

            Ok(outcome)
        }
    }
}
