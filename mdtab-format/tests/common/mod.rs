//! Shared helpers for the integration tests.

use mdtab_format::{Document, Replacement, TableEdit};

/// Apply an edit to a copy of `lines` and return the resulting lines.
pub fn apply_edit(lines: &[&str], edit: &TableEdit) -> Vec<String> {
    apply(lines, &edit.replacements)
}

pub fn apply(lines: &[&str], replacements: &[Replacement]) -> Vec<String> {
    let mut doc = Document::from_lines(lines.iter().copied());
    doc.apply(replacements).expect("replacements to apply");
    doc.lines().to_vec()
}

/// Join lines for snapshotting.
pub fn joined(lines: &[String]) -> String {
    lines.join("\n")
}
