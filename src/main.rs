//! Command-line front end for loctally.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

use loctally::cli::{normalize_legacy_flags, Args};
use loctally::report::{build_language_listing, build_report};
use loctally::Config;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_legacy_flags(env::args_os()));
    init_logging(args.verbose);

    if args.languages {
        print!("{}", build_language_listing());
        return ExitCode::SUCCESS;
    }

    let outcome = Config::from_args(&args).and_then(|config| {
        println!(
            "{} {}",
            env!("CARGO_PKG_NAME").bright_cyan().bold(),
            format!("v{}", env!("CARGO_PKG_VERSION")).bright_yellow()
        );
        loctally::run(config)
    });

    match outcome {
        Ok(snapshot) => {
            print!("{}", build_report(&snapshot));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}: {}", "Error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
