//! Whole-text conveniences
//!
//! Hosts that react to single lines use [`crate::TableFormatter`] directly. These helpers serve
//! batch callers (the CLI, save hooks, tests) that hold the document as one string.

use crate::csv::convert_csv_at_line;
use crate::document::{Document, LineSource, Replacement};
use crate::error::FormatError;
use crate::rules::{CsvRules, TableRules};
use crate::table::{Cursor, TableFormatter};

/// Format every table block in `source`, each block once, skipping fenced code per `rules`.
pub fn format_all_tables<S: LineSource + ?Sized>(
    source: &S,
    rules: &TableRules,
) -> Vec<Replacement> {
    let formatter = TableFormatter::new(rules.clone());
    formatter
        .analyze_all(source)
        .into_iter()
        .flat_map(|table| formatter.render(source, table, None).replacements)
        .collect()
}

/// Format every table in a text.
///
/// Each line keeps its own terminator and the trailing newline is preserved, so `|a|b|` over
/// `|-|-|` becomes `| a   | b   |` over `| --- | --- |` and nothing else in the text moves.
pub fn format_text(source: &str, rules: &TableRules) -> Result<String, FormatError> {
    let mut doc = Document::from_text(source);
    let replacements = format_all_tables(&doc, rules);
    doc.apply(&replacements)?;
    Ok(doc.to_text())
}

/// Format only the table around `line`, returning the new text and the remapped cursor.
///
/// When the line is not part of a table the text comes back unchanged along with the
/// original cursor.
pub fn format_text_at_line(
    source: &str,
    line: usize,
    cursor: Option<Cursor>,
    rules: &TableRules,
) -> Result<(String, Option<Cursor>), FormatError> {
    let mut doc = Document::from_text(source);
    let formatter = TableFormatter::new(rules.clone());
    let Some(edit) = formatter.format_at_line(&doc, line, cursor) else {
        return Ok((source.to_string(), cursor));
    };
    doc.apply(&edit.replacements)?;
    Ok((doc.to_text(), edit.cursor.or(cursor)))
}

/// Convert the delimited block around `line` into a table, `None` when there is nothing to
/// convert.
pub fn convert_csv_text(
    source: &str,
    line: usize,
    csv_rules: &CsvRules,
    table_rules: &TableRules,
) -> Result<Option<String>, FormatError> {
    csv_rules.validate()?;
    let mut doc = Document::from_text(source);
    let Some(splice) = convert_csv_at_line(&doc, line, csv_rules, table_rules) else {
        return Ok(None);
    };
    doc.splice(&splice)?;
    Ok(Some(doc.to_text()))
}
