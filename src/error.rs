//! Error classification for the counting pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure classes surfaced by the counting pipeline.
///
/// Platform errors are wrapped into one of these so callers can decide
/// what is fatal (configuration, backend) and what only affects a single
/// file or subtree (file read, enumeration).
#[derive(Debug, Error)]
pub enum LocError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("cannot enumerate {}: {source}", path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("allocation of {requested} bytes failed")]
    Allocation { requested: u64 },
}

pub type Result<T> = std::result::Result<T, LocError>;

impl LocError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        LocError::Configuration(msg.into())
    }

    pub fn enumeration(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocError::Enumeration {
            path: path.into(),
            source,
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocError::FileRead {
            path: path.into(),
            source,
        }
    }
}
