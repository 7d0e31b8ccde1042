//! Turning a block of delimited lines into a pipe table
//!
//! A pasted run of comma separated lines becomes a table with the first line as header and a
//! separator row inserted below it. The output goes through the same layout as the table
//! formatter, so formatting the converted block afterwards changes nothing.

use crate::document::{LineSource, Splice};
use crate::rules::{CsvRules, TableRules};
use crate::table::{is_in_fenced_code_block, is_separator_row, ColumnLayout, Row, TableBlock};

fn is_delimited(line: &str, delimiter: char) -> bool {
    line.contains(delimiter) && !line.contains('|')
}

/// Find the run of delimited, pipe-free lines around `line`.
pub fn find_csv_block<S: LineSource + ?Sized>(
    source: &S,
    line: usize,
    delimiter: char,
) -> Option<TableBlock> {
    if !is_delimited(source.line_at(line)?, delimiter) {
        return None;
    }

    let mut start = line;
    while start > 0 && is_delimited(source.line(start - 1), delimiter) {
        start -= 1;
    }
    let mut end = line;
    while end + 1 < source.line_count() && is_delimited(source.line(end + 1), delimiter) {
        end += 1;
    }

    Some(TableBlock { start, end })
}

/// Split one delimited line into trimmed cells.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Convert the delimited block around `line` into an aligned pipe table.
///
/// Returns `None` when the line is not delimited, sits in a fenced code block (per
/// `table_rules`), or the block has fewer than `csv_rules.min_rows` lines.
pub fn convert_csv_at_line<S: LineSource + ?Sized>(
    source: &S,
    line: usize,
    csv_rules: &CsvRules,
    table_rules: &TableRules,
) -> Option<Splice> {
    if table_rules.skip_fenced_code && is_in_fenced_code_block(source, line) {
        tracing::debug!(line, "line is inside a fenced code block; not converting");
        return None;
    }
    let block = find_csv_block(source, line, csv_rules.delimiter)?;
    if block.line_count() < csv_rules.min_rows.max(1) {
        tracing::debug!(
            start = block.start,
            end = block.end,
            min_rows = csv_rules.min_rows,
            "delimited block too short to convert"
        );
        return None;
    }

    let records: Vec<Vec<String>> = (block.start..=block.end)
        .map(|index| split_record(source.line(index), csv_rules.delimiter))
        .collect();
    let columns = records.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(records.len() + 1);
    for (offset, cells) in records.into_iter().enumerate() {
        let separator = is_separator_row(&cells[..]);
        rows.push(Row {
            line: block.start + offset,
            cells,
            separator,
        });
        if offset == 0 {
            rows.push(Row {
                line: block.start,
                cells: vec!["---".to_string(); columns],
                separator: true,
            });
        }
    }

    let layout = ColumnLayout::measure(&rows, table_rules);
    let lines = rows
        .iter()
        .map(|row| layout.render(row, table_rules))
        .collect();
    let original = (block.start..=block.end)
        .map(|index| source.line(index).to_string())
        .collect();

    tracing::debug!(
        start = block.start,
        end = block.end,
        columns,
        "converted delimited block to table"
    );

    Some(Splice {
        start: block.start,
        end: block.end,
        original,
        lines,
    })
}
