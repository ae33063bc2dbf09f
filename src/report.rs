//! Report and language-listing rendering.

use std::fmt::Write;

use colored::Colorize;
use terminal_size::{terminal_size, Width};

use crate::aggregator::{LanguageRecord, Snapshot, Totals};
use crate::registry;

const LANG_WIDTH: usize = 24;
const NUM_WIDTH: usize = 10;
const TABLE_WIDTH: usize = LANG_WIDTH + 5 * (NUM_WIDTH + 1);

fn separator_width() -> usize {
    match terminal_size() {
        Some((Width(columns), _)) => TABLE_WIDTH.min(usize::from(columns).max(1)),
        None => TABLE_WIDTH,
    }
}

fn format_row(label: &str, files: u64, blank: u64, comment: u64, code: u64, total: u64) -> String {
    format!(
        "{:<lang$} {:>num$} {:>num$} {:>num$} {:>num$} {:>num$}",
        label,
        files,
        blank,
        comment,
        code,
        total,
        lang = LANG_WIDTH,
        num = NUM_WIDTH
    )
}

fn format_record(record: &LanguageRecord) -> String {
    format_row(
        record.language,
        record.files,
        record.lines_blank,
        record.lines_comment,
        record.lines_code(),
        record.lines_total,
    )
}

fn format_totals(totals: &Totals) -> String {
    format_row(
        "Total",
        totals.files,
        totals.lines_blank,
        totals.lines_comment,
        totals.lines_code(),
        totals.lines_total,
    )
}

/// Per-language table in first-insertion order, the totals row and the
/// ignored-file count.
pub fn build_report(snapshot: &Snapshot) -> String {
    let mut output = String::new();
    let rule = "-".repeat(separator_width());

    let header = format!(
        "{:<lang$} {:>num$} {:>num$} {:>num$} {:>num$} {:>num$}",
        "Language",
        "Files",
        "Blank",
        "Comment",
        "Code",
        "Total",
        lang = LANG_WIDTH,
        num = NUM_WIDTH
    );
    let _ = writeln!(output, "{rule}");
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{rule}");

    for record in &snapshot.records {
        let _ = writeln!(output, "{}", format_record(record));
    }

    let _ = writeln!(output, "{rule}");
    let _ = writeln!(output, "{}", format_totals(&snapshot.totals).bright_yellow());
    let _ = writeln!(
        output,
        "\nIgnored files: {}",
        snapshot.totals.ignored.to_string().bright_yellow()
    );
    output
}

/// Every supported language with its comment family and keys.
pub fn build_language_listing() -> String {
    let mut output = String::new();
    let languages = registry::languages();
    let _ = writeln!(
        output,
        "{} ({})",
        "Supported languages:".blue().bold(),
        languages.len()
    );
    for summary in languages {
        let _ = writeln!(
            output,
            "{:<lang$} [{}] {}",
            summary.language,
            summary.family,
            summary.keys.join(" "),
            lang = LANG_WIDTH
        );
    }
    output
}
