//! Human-readable messages for insert and setup outcomes.

use crate::charset::{AsciiReport, InsertReport, ASCII_PRINTABLE_END};
use crate::unicode::{describe, UnicodeDatabase};

fn list(chars: &[char], db: &impl UnicodeDatabase) -> String {
    chars
        .iter()
        .map(|c| describe(db, *c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One warning covering duplicates and overflow, or `None` if there were neither.
pub fn insert_warning(report: &InsertReport, db: &impl UnicodeDatabase) -> Option<String> {
    let mut sections = Vec::new();
    if !report.overflow.is_empty() {
        sections.push(format!(
            "{} selected characters didn't fit in your character set. They include:\n{}",
            report.overflow.len(),
            list(&report.overflow, db)
        ));
    }
    if !report.duplicates.is_empty() {
        sections.push(format!(
            "{} selected characters are already in your character set. They include:\n{}",
            report.duplicates.len(),
            list(&report.duplicates, db)
        ));
    }
    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

/// Confirmation for characters that were placed.
pub fn placed_message(report: &InsertReport, db: &impl UnicodeDatabase) -> Option<String> {
    match report.placed.as_slice() {
        [] => None,
        [(index, c)] => Some(format!(
            "Added U+{:04X} {} at slot {}.",
            *c as u32,
            db.name(*c),
            index
        )),
        placed => Some(format!("Added {} characters.", placed.len())),
    }
}

/// Warning for ASCII characters that did not fit, or `None` if all fit.
pub fn ascii_warning(report: &AsciiReport) -> Option<String> {
    if report.did_not_fit.is_empty() {
        return None;
    }
    Some(format!(
        "{} printable ASCII characters didn't fit in your charset. \
         Please select a size of at least {} characters to avoid this.",
        report.did_not_fit.len(),
        ASCII_PRINTABLE_END
    ))
}
