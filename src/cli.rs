//! Command-line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::BackendChoice;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Source line counter for many programming languages",
    long_about = "Counts blank, comment and code lines per language under a file or directory. \
                  Use --languages to list every recognised extension.",
    color = clap::ColorChoice::Auto
)]
pub struct Args {
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    /// Do not descend into subdirectories
    #[arg(short = 'n', long = "no-recurse", alias = "non-recursive")]
    pub no_recurse: bool,

    #[arg(long, value_enum, default_value_t = BackendChoice::Auto)]
    pub backend: BackendChoice,

    /// Worker threads for the pool backend
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,

    /// Directory names to skip
    #[arg(short, long, action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Glob matched against file names or root-relative paths
    #[arg(short = 'f', long)]
    pub filespec: Option<String>,

    /// Print supported languages and exit
    #[arg(short = 'l', long)]
    pub languages: bool,
}

/// Rewrite the single-dash long spellings (`-nr`, `-norecurse`, `-backend`,
/// `-threads`) to the double-dash forms clap understands. Arguments after a
/// bare `--` are left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let replacement = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some("-nr") | Some("-norecurse") => Some("--no-recurse"),
                Some("-backend") => Some("--backend"),
                Some("-threads") => Some("--threads"),
                _ => None,
            };
            replacement.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}
