//! Shared counting state for one run.
//!
//! Per-language records and the global totals live behind a single mutex.
//! Workers only take it to merge a finished file, never while reading or
//! classifying.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::classifier::LineCounts;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    /// Key that first matched this language.
    pub extension_key: &'static str,
    pub language: &'static str,
    pub files: u64,
    pub lines_total: u64,
    pub lines_blank: u64,
    pub lines_comment: u64,
}

impl LanguageRecord {
    fn new(language: &'static str, extension_key: &'static str) -> Self {
        LanguageRecord {
            extension_key,
            language,
            files: 0,
            lines_total: 0,
            lines_blank: 0,
            lines_comment: 0,
        }
    }

    pub fn lines_code(&self) -> u64 {
        self.lines_total
            .saturating_sub(self.lines_blank + self.lines_comment)
    }

    fn add(&mut self, counts: LineCounts) {
        self.files += 1;
        self.lines_total += counts.total;
        self.lines_blank += counts.blank;
        self.lines_comment += counts.comment;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: u64,
    pub lines_total: u64,
    pub lines_blank: u64,
    pub lines_comment: u64,
    pub ignored: u64,
}

impl Totals {
    pub fn lines_code(&self) -> u64 {
        self.lines_total
            .saturating_sub(self.lines_blank + self.lines_comment)
    }
}

/// Records in first-insertion order plus the global totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<LanguageRecord>,
    pub totals: Totals,
}

impl Snapshot {
    pub fn record(&self, language: &str) -> Option<&LanguageRecord> {
        self.records.iter().find(|r| r.language == language)
    }
}

#[derive(Debug, Default)]
struct Tally {
    records: Vec<LanguageRecord>,
    positions: HashMap<&'static str, usize>,
    totals: Totals,
}

/// One invocation over a single root: its configuration and the counts
/// gathered so far.
#[derive(Debug)]
pub struct Revision {
    config: Config,
    tally: Mutex<Tally>,
}

impl Revision {
    pub fn new(config: Config) -> Self {
        Revision {
            config,
            tally: Mutex::new(Tally::default()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Tally> {
        // Counters stay consistent even if a holder panicked mid-run.
        self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merge one file into its language record, creating the record on
    /// first sight, and into the totals.
    pub fn credit(&self, language: &'static str, extension_key: &'static str, counts: LineCounts) {
        let mut tally = self.lock();
        let Tally {
            records,
            positions,
            totals,
        } = &mut *tally;
        let slot = *positions.entry(language).or_insert_with(|| {
            records.push(LanguageRecord::new(language, extension_key));
            records.len() - 1
        });
        records[slot].add(counts);
        totals.files += 1;
        totals.lines_total += counts.total;
        totals.lines_blank += counts.blank;
        totals.lines_comment += counts.comment;
    }

    pub fn mark_ignored(&self) {
        self.lock().totals.ignored += 1;
    }

    pub fn snapshot(&self) -> Snapshot {
        let tally = self.lock();
        Snapshot {
            records: tally.records.clone(),
            totals: tally.totals,
        }
    }
}
