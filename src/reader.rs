//! Whole-file reads with text detection.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LocError, Result};
use crate::faults;

/// Files larger than this are skipped.
pub const MAX_FILE_SIZE: u64 = 4 * 1024 * 1024 * 1024;

/// Number of content bytes searched for NUL when sniffing binaries.
const BINARY_PROBE_LEN: usize = 4096;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// File contents with any UTF-8 byte order mark stepped over.
#[derive(Debug, Default)]
pub struct FileBuffer {
    bytes: Vec<u8>,
    offset: usize,
}

impl FileBuffer {
    /// Bytes after the BOM.
    pub fn content(&self) -> &[u8] {
        &self.bytes[self.offset..]
    }

    pub fn len(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_bom(&self) -> bool {
        self.offset > 0
    }
}

/// Why a readable file is not treated as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooLarge { size: u64 },
    Utf16,
    Binary,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge { size } => {
                write!(f, "file too large ({size} bytes, limit {MAX_FILE_SIZE})")
            }
            SkipReason::Utf16 => f.write_str("UTF-16 byte order mark"),
            SkipReason::Binary => f.write_str("NUL byte in leading content"),
        }
    }
}

#[derive(Debug)]
pub enum ReadOutcome {
    Text(FileBuffer),
    Skip(SkipReason),
}

/// Read `path` in full and decide whether it is countable text.
///
/// Open and read failures are errors; oversize, UTF-16 and binary files are
/// `Skip` verdicts. Any buffer is dropped before a non-text result returns.
pub fn read(path: &Path) -> Result<ReadOutcome> {
    faults::check(path, faults::READ_FAIL_TAG).map_err(|err| LocError::file_read(path, err))?;

    let mut file = File::open(path).map_err(|err| LocError::file_read(path, err))?;
    let size = file
        .metadata()
        .map_err(|err| LocError::file_read(path, err))?
        .len();

    if size == 0 {
        return Ok(ReadOutcome::Text(FileBuffer::default()));
    }
    if size > MAX_FILE_SIZE {
        return Ok(ReadOutcome::Skip(SkipReason::TooLarge { size }));
    }

    let capacity = usize::try_from(size).map_err(|_| LocError::Allocation { requested: size })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(capacity)
        .map_err(|_| LocError::Allocation { requested: size })?;
    file.read_to_end(&mut bytes)
        .map_err(|err| LocError::file_read(path, err))?;

    Ok(inspect(bytes))
}

/// BOM and binary checks over an already loaded buffer.
pub fn inspect(bytes: Vec<u8>) -> ReadOutcome {
    if bytes.starts_with(UTF16_LE_BOM) || bytes.starts_with(UTF16_BE_BOM) {
        return ReadOutcome::Skip(SkipReason::Utf16);
    }
    let offset = if bytes.starts_with(UTF8_BOM) {
        UTF8_BOM.len()
    } else {
        0
    };
    let probe_end = bytes.len().min(offset + BINARY_PROBE_LEN);
    if bytes[offset..probe_end].contains(&0) {
        return ReadOutcome::Skip(SkipReason::Binary);
    }
    ReadOutcome::Text(FileBuffer { bytes, offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn text(outcome: ReadOutcome) -> FileBuffer {
        match outcome {
            ReadOutcome::Text(buffer) => buffer,
            ReadOutcome::Skip(reason) => panic!("expected text, got skip: {reason}"),
        }
    }

    #[test]
    fn test_read_plain_text() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("a.c");
        fs::write(&path, "int x;\n")?;
        let buffer = text(read(&path).expect("read should succeed"));
        assert_eq!(buffer.content(), b"int x;\n");
        assert!(!buffer.has_bom());
        Ok(())
    }

    #[test]
    fn test_read_empty_file_is_text() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.c");
        fs::write(&path, "")?;
        let buffer = text(read(&path).expect("read should succeed"));
        assert!(buffer.is_empty());
        Ok(())
    }

    #[test]
    fn test_utf8_bom_is_skipped_over() {
        let buffer = text(inspect(b"\xEF\xBB\xBFint x;\n".to_vec()));
        assert!(buffer.has_bom());
        assert_eq!(buffer.content(), b"int x;\n");
        assert_eq!(buffer.len(), 7);
    }

    #[test]
    fn test_utf16_boms_are_skipped() {
        assert!(matches!(
            inspect(b"\xFF\xFEa\x00".to_vec()),
            ReadOutcome::Skip(SkipReason::Utf16)
        ));
        assert!(matches!(
            inspect(b"\xFE\xFF\x00a".to_vec()),
            ReadOutcome::Skip(SkipReason::Utf16)
        ));
    }

    #[test]
    fn test_nul_in_probe_window_marks_binary() {
        let mut bytes = vec![b'a'; 100];
        bytes[50] = 0;
        assert!(matches!(
            inspect(bytes),
            ReadOutcome::Skip(SkipReason::Binary)
        ));
    }

    #[test]
    fn test_nul_beyond_probe_window_is_ignored() {
        let mut bytes = vec![b'a'; BINARY_PROBE_LEN + 10];
        bytes[BINARY_PROBE_LEN + 5] = 0;
        let buffer = text(inspect(bytes));
        assert_eq!(buffer.len(), BINARY_PROBE_LEN + 10);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let err = read(&temp_dir.path().join("missing.c")).expect_err("missing file must fail");
        assert!(matches!(err, LocError::FileRead { .. }), "got {err:?}");
    }

    #[test]
    fn test_simulated_read_failure() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(format!("{}.c", faults::READ_FAIL_TAG));
        fs::write(&path, "int x;\n")?;
        let err = read(&path).expect_err("tagged file must fail");
        assert!(err.to_string().contains("simulated failure"), "got {err}");
        Ok(())
    }
}
