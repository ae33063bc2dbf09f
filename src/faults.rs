//! Simulated I/O failures keyed on file names, for exercising error paths
//! from tests, plus a worker spawn limit for the thread pool. Active in unit
//! tests, or when `LOCTALLY_ENABLE_FAULTS` is set.

use std::io;
use std::path::Path;

pub(crate) const READ_FAIL_TAG: &str = "__loctally_read_fail__";
pub(crate) const READ_DIR_FAIL_TAG: &str = "__loctally_read_dir_fail__";
const FAULT_ENV_VAR: &str = "LOCTALLY_ENABLE_FAULTS";

fn enabled() -> bool {
    cfg!(test) || std::env::var_os(FAULT_ENV_VAR).is_some()
}

/// True when `path`'s file name starts with `tag` and injection is on.
fn should_fail(path: &Path, tag: &str) -> bool {
    enabled()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with(tag))
            .unwrap_or(false)
}

pub(crate) fn check(path: &Path, tag: &str) -> io::Result<()> {
    if should_fail(path, tag) {
        return Err(io::Error::other(format!("simulated failure ({tag})")));
    }
    Ok(())
}

/// Fails spawning pool worker `index` once `limit` workers have started.
pub(crate) fn check_spawn(index: usize, limit: Option<usize>) -> io::Result<()> {
    match limit {
        Some(limit) if enabled() && index >= limit => Err(io::Error::other(format!(
            "simulated failure (spawn worker {index})"
        ))),
        _ => Ok(()),
    }
}
