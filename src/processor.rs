//! Per-file work: resolve, read, classify, credit.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::aggregator::Revision;
use crate::classifier::{classify, LineCounts};
use crate::reader::{self, ReadOutcome};
use crate::registry::{self, Mapping};

/// Counts for a single file, ready to be credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRecord {
    pub language: &'static str,
    pub extension_key: &'static str,
    pub counts: LineCounts,
}

/// Language mapping for a path's file name, if it has one.
pub fn resolve_path(path: &Path) -> Option<Mapping> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(registry::resolve)
}

/// Measure one file without touching shared state.
///
/// Returns `None` for names with no mapping. Unreadable and non-text files
/// still produce a record, with zero lines.
pub fn measure(path: &Path) -> Option<FileRecord> {
    let mapping = resolve_path(path)?;
    let family = registry::family_of(mapping.language);

    let counts = match reader::read(path) {
        Ok(ReadOutcome::Text(buffer)) if buffer.is_empty() => LineCounts::default(),
        Ok(ReadOutcome::Text(buffer)) => {
            if buffer.has_bom() {
                debug!(path = %path.display(), "skipping UTF-8 byte order mark");
            }
            classify(buffer.content(), family)
        }
        Ok(ReadOutcome::Skip(reason)) => {
            info!(path = %path.display(), %reason, "skipping non-text file");
            LineCounts::default()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "counting file with zero lines");
            LineCounts::default()
        }
    };

    debug!(
        path = %path.display(),
        language = mapping.language,
        family = %family,
        total = counts.total,
        blank = counts.blank,
        comment = counts.comment,
        code = counts.code(),
        "counted file"
    );

    Some(FileRecord {
        language: mapping.language,
        extension_key: mapping.key,
        counts,
    })
}

/// Processes files into a shared [`Revision`]. Cheap to clone; every
/// worker holds its own copy.
#[derive(Debug, Clone)]
pub struct Processor {
    revision: Arc<Revision>,
}

impl Processor {
    pub fn new(revision: Arc<Revision>) -> Self {
        Processor { revision }
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// Measure `path` outside any lock, then credit the result.
    pub fn process(&self, path: &Path) {
        if let Some(record) = measure(path) {
            self.revision
                .credit(record.language, record.extension_key, record.counts);
        }
    }
}
