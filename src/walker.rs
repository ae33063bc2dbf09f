//! Directory traversal and the submit policy that sits between the walk
//! and a backend.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};

use crate::aggregator::Revision;
use crate::backend::Backend;
use crate::error::{LocError, Result};
use crate::faults;
use crate::processor::resolve_path;

/// An owned path handed from the walker to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WorkItem {
    pub fn file(path: PathBuf) -> Self {
        WorkItem {
            path,
            is_dir: false,
        }
    }

    pub fn dir(path: PathBuf) -> Self {
        WorkItem { path, is_dir: true }
    }
}

fn open_dir(path: &Path) -> Result<ReadDir> {
    faults::check(path, faults::READ_DIR_FAIL_TAG)
        .and_then(|()| fs::read_dir(path))
        .map_err(|err| LocError::enumeration(path, err))
}

/// Depth-first walk yielding every file and directory under a root.
///
/// Only regular files and directories are yielded; symbolic links, FIFOs,
/// sockets and device nodes are skipped. A subdirectory that cannot
/// be listed produces one `Err` and the walk carries on with its siblings.
#[derive(Debug)]
pub struct DirWalk {
    stack: Vec<ReadDir>,
    pending: Option<WorkItem>,
    recurse: bool,
    ignore: Vec<String>,
}

impl DirWalk {
    /// Start a walk. Fails only if `root` itself cannot be inspected or listed.
    pub fn new(root: &Path, recurse: bool, ignore: &[String]) -> Result<Self> {
        let metadata = fs::metadata(root).map_err(|err| LocError::enumeration(root, err))?;
        let mut walk = DirWalk {
            stack: Vec::new(),
            pending: None,
            recurse,
            ignore: ignore.to_vec(),
        };
        if metadata.is_dir() {
            walk.stack.push(open_dir(root)?);
        } else if metadata.is_file() {
            walk.pending = Some(WorkItem::file(root.to_path_buf()));
        } else {
            warn!(path = %root.display(), "skipping special file");
        }
        Ok(walk)
    }

    fn is_ignored(&self, dir: &Path) -> bool {
        self.ignore
            .iter()
            .any(|name| dir.ends_with(Path::new(name)))
    }
}

impl Iterator for DirWalk {
    type Item = Result<WorkItem>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(Ok(item));
        }
        loop {
            let entries = self.stack.last_mut()?;
            let entry = match entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => return Some(Err(LocError::enumeration(path, err))),
            };

            if file_type.is_symlink() {
                warn!(path = %path.display(), "skipping symbolic link");
                continue;
            }
            if file_type.is_file() {
                return Some(Ok(WorkItem::file(path)));
            }
            if !file_type.is_dir() {
                // FIFOs, sockets and device nodes can block on open.
                warn!(path = %path.display(), "skipping special file");
                continue;
            }

            if !self.recurse {
                continue;
            }
            if self.is_ignored(&path) {
                debug!(path = %path.display(), "skipping ignored directory");
                continue;
            }
            match open_dir(&path) {
                Ok(children) => self.stack.push(children),
                Err(err) => return Some(Err(err)),
            }
            return Some(Ok(WorkItem::dir(path)));
        }
    }
}

/// Decides what happens to each walked entry: submitted, counted as
/// ignored, or dropped.
#[derive(Debug)]
pub struct SubmitPolicy<'a> {
    root: &'a Path,
    filespec: Option<&'a Pattern>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Submit,
    Ignore,
    Skip,
}

impl<'a> SubmitPolicy<'a> {
    pub fn new(root: &'a Path, filespec: Option<&'a Pattern>) -> Self {
        SubmitPolicy { root, filespec }
    }

    pub fn verdict(&self, item: &WorkItem) -> Verdict {
        if item.is_dir || !self.matches_filespec(&item.path) {
            return Verdict::Skip;
        }
        match resolve_path(&item.path) {
            Some(_) => Verdict::Submit,
            None => Verdict::Ignore,
        }
    }

    /// Name match first, then the root-relative path with `/` separators.
    fn matches_filespec(&self, path: &Path) -> bool {
        let Some(pattern) = self.filespec else {
            return true;
        };
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));
        if name_matches {
            return true;
        }
        path.strip_prefix(self.root)
            .ok()
            .and_then(|relative| relative.to_str())
            .is_some_and(|relative| pattern.matches(&relative.replace('\\', "/")))
    }
}

/// Walk the configured root and feed `backend`.
///
/// Subtree failures are logged and skipped. Errors opening the root or
/// submitting to the backend end the walk.
pub fn walk_and_submit(revision: &Revision, backend: &mut dyn Backend) -> Result<()> {
    let config = revision.config();
    let policy = SubmitPolicy::new(&config.root, config.filespec.as_ref());

    for entry in DirWalk::new(&config.root, config.recurse, &config.ignore)? {
        let item = match entry {
            Ok(item) => item,
            Err(err) => {
                warn!(error = %err, "skipping subtree");
                continue;
            }
        };
        match policy.verdict(&item) {
            Verdict::Submit => backend.submit(item)?,
            Verdict::Ignore => revision.mark_ignored(),
            Verdict::Skip => {}
        }
    }
    Ok(())
}
