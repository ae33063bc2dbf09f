//! Validated run configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use glob::Pattern;

use crate::cli::Args;
use crate::error::{LocError, Result};

/// How submitted files get processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// Pool when it can be started, otherwise inline.
    Auto,
    /// Inline on the walking thread.
    #[value(name = "sync", alias = "synchronous")]
    Sync,
    /// A fixed set of worker threads.
    #[value(name = "threadpool")]
    ThreadPool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub recurse: bool,
    pub backend: BackendChoice,
    /// Requested worker count; `None` means one per logical CPU.
    pub threads: Option<u32>,
    pub verbose: bool,
    /// Directory names the walker never enters.
    pub ignore: Vec<String>,
    /// Only files matching this pattern are considered.
    pub filespec: Option<Pattern>,
}

impl Config {
    /// Defaults for `root`: recurse, auto backend, CPU-count workers.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        validate_root(&root)?;
        Ok(Config {
            root,
            recurse: true,
            backend: BackendChoice::Auto,
            threads: None,
            verbose: false,
            ignore: Vec::new(),
            filespec: None,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = Config::new(&args.path)?;
        config.recurse = !args.no_recurse;
        config.backend = args.backend;
        config.threads = match args.threads {
            Some(0) => {
                return Err(LocError::configuration("thread count must be positive"));
            }
            other => other,
        };
        config.verbose = args.verbose;
        config.ignore = args.ignore.clone();
        config.filespec = args
            .filespec
            .as_deref()
            .map(|spec| {
                Pattern::new(spec).map_err(|err| {
                    LocError::configuration(format!("invalid filespec pattern '{spec}': {err}"))
                })
            })
            .transpose()?;
        Ok(config)
    }

    pub fn with_backend(mut self, backend: BackendChoice) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    /// Pool size: the requested count, else the logical CPU count, never zero.
    pub fn worker_count(&self) -> usize {
        self.threads
            .map(|n| n as usize)
            .unwrap_or_else(num_cpus::get)
            .max(1)
    }
}

fn validate_root(root: &Path) -> Result<()> {
    let text = root.to_string_lossy();
    if text.is_empty() {
        return Err(LocError::configuration("root path is empty"));
    }
    if Pattern::escape(&text) != text {
        return Err(LocError::configuration(format!(
            "wildcards are not allowed in the root path: {}",
            root.display()
        )));
    }
    if !root.exists() {
        return Err(LocError::configuration(format!(
            "Path does not exist: {}",
            root.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("loctally").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::new(temp_dir.path()).expect("valid root");
        assert!(config.recurse);
        assert_eq!(config.backend, BackendChoice::Auto);
        assert!(config.threads.is_none());
        assert!(config.worker_count() >= 1);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_configuration_error() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let err = Config::new(temp_dir.path().join("missing")).expect_err("must fail");
        assert!(matches!(err, LocError::Configuration(_)), "got {err:?}");
        assert!(err.to_string().contains("Path does not exist"), "got {err}");
        Ok(())
    }

    #[test]
    fn test_wildcard_root_is_rejected() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        for pattern in ["*.c", "src?", "[ab]"] {
            let err = Config::new(temp_dir.path().join(pattern)).expect_err("must fail");
            assert!(err.to_string().contains("wildcards"), "{pattern}: {err}");
        }
        Ok(())
    }

    #[test]
    fn test_from_args_maps_every_option() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_string_lossy().into_owned();
        let args = parse(&[
            &root,
            "--no-recurse",
            "--backend",
            "threadpool",
            "--threads",
            "3",
            "-v",
            "--ignore",
            "vendor",
            "--filespec",
            "*.rs",
        ]);
        let config = Config::from_args(&args).expect("valid config");
        assert!(!config.recurse);
        assert_eq!(config.backend, BackendChoice::ThreadPool);
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.worker_count(), 3);
        assert!(config.verbose);
        assert_eq!(config.ignore, vec!["vendor".to_string()]);
        assert!(config.filespec.is_some());
        Ok(())
    }

    #[test]
    fn test_invalid_filespec_is_rejected() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_string_lossy().into_owned();
        let args = parse(&[&root, "--filespec", "[unclosed"]);
        let err = Config::from_args(&args).expect_err("must fail");
        assert!(err.to_string().contains("invalid filespec"), "got {err}");
        Ok(())
    }

    #[test]
    fn test_synchronous_alias() {
        let args = parse(&[".", "--backend", "synchronous"]);
        assert_eq!(args.backend, BackendChoice::Sync);
        let args = parse(&[".", "--backend", "sync"]);
        assert_eq!(args.backend, BackendChoice::Sync);
    }

    #[test]
    fn test_backend_names_are_case_sensitive() {
        let result = Args::try_parse_from(["loctally", ".", "--backend", "Sync"]);
        assert!(result.is_err(), "mixed-case backend name should be rejected");
    }

    #[test]
    fn test_thread_count_bounds() {
        assert!(Args::try_parse_from(["loctally", ".", "--threads", "0"]).is_err());
        assert!(Args::try_parse_from(["loctally", ".", "--threads", "4294967296"]).is_err());
        assert!(Args::try_parse_from(["loctally", ".", "--threads", "4294967295"]).is_ok());
    }
}
