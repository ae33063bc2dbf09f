//! # loctally
//!
//! Counts blank, comment and code lines per language under a file or
//! directory. The walker feeds a dispatch backend (inline or a worker
//! pool), workers classify each file by its comment family, and results
//! are merged into one shared [`aggregator::Revision`].

pub mod aggregator;
pub mod backend;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
mod faults;
pub mod processor;
pub mod reader;
pub mod registry;
pub mod report;
pub mod walker;

use std::sync::Arc;

use tracing::{debug, error};

pub use aggregator::Snapshot;
pub use config::Config;
pub use error::{LocError, Result};

use aggregator::Revision;
use processor::Processor;

/// Count everything under `config.root`.
///
/// The backend is always drained, even when the walk stops early. A failed
/// drain is logged and the counts gathered so far are still returned.
pub fn run(config: Config) -> Result<Snapshot> {
    let revision = Arc::new(Revision::new(config));
    let processor = Processor::new(Arc::clone(&revision));
    let mut backend = backend::select(revision.config(), processor);
    debug!(
        backend = backend.name(),
        workers = backend.worker_count(),
        root = %revision.config().root.display(),
        "starting walk"
    );

    let walked = walker::walk_and_submit(&revision, backend.as_mut());
    if let Err(err) = backend.drain_and_shutdown() {
        error!(error = %err, "backend shutdown failed");
    }
    walked?;
    Ok(revision.snapshot())
}
