//! Incremental pipe-table formatter
//!
//! [`TableFormatter::format_at_line`] is the entry point hosts call from their change and
//! selection handlers. It finds the pipe block around a line, decides whether the block is a
//! table at all, and answers with the minimal set of line replacements that align it.
//!
//! A block is treated as a table only when it has at least two rows and one of them is a
//! separator row. Anything else (prose that happens to contain a pipe, a lone row being typed)
//! is left untouched, which keeps reactive formatting from mangling ordinary text.

pub mod block;
pub mod cursor;
pub mod layout;
pub mod row;

pub use block::{fenced_lines, find_table_block, is_in_fenced_code_block, TableBlock};
pub use cursor::{remap_column, Cursor};
pub use layout::{pad_cell, ColumnLayout};
pub use row::{is_separator_row, parse_row, Alignment, Row};

use crate::document::{LineSource, Replacement};
use crate::rules::TableRules;
use serde::Serialize;

/// Parsed view of a table block, before any rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableAnalysis {
    pub block: TableBlock,
    pub rows: Vec<Row>,
    pub layout: ColumnLayout,
}

/// Result of formatting one table block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableEdit {
    pub block: TableBlock,
    /// Lines whose text changes; empty when the block is already formatted
    pub replacements: Vec<Replacement>,
    /// Where the cursor should go, when it sat on a rewritten line
    pub cursor: Option<Cursor>,
}

impl TableEdit {
    pub fn is_noop(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Table formatter configured with a set of [`TableRules`].
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    rules: TableRules,
}

impl TableFormatter {
    pub fn new(rules: TableRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Locate and parse the table around `line`.
    ///
    /// `None` means "not a table": the line has no pipe, sits in a fenced code block, or its
    /// block lacks two rows or a separator row.
    pub fn analyze<S: LineSource + ?Sized>(
        &self,
        source: &S,
        line: usize,
    ) -> Option<TableAnalysis> {
        if self.rules.skip_fenced_code && is_in_fenced_code_block(source, line) {
            tracing::debug!(line, "line is inside a fenced code block; skipping");
            return None;
        }
        let Some(block) = find_table_block(source, line) else {
            tracing::debug!(line, "line holds no pipe; nothing to format");
            return None;
        };
        self.analyze_block(source, block)
    }

    /// Parse an already located block.
    pub fn analyze_block<S: LineSource + ?Sized>(
        &self,
        source: &S,
        block: TableBlock,
    ) -> Option<TableAnalysis> {
        let rows: Vec<Row> = (block.start..=block.end)
            .filter_map(|index| Row::parse(index, source.line(index)))
            .collect();

        if rows.len() < 2 {
            tracing::debug!(
                start = block.start,
                end = block.end,
                "pipe block has fewer than two rows; leaving untouched"
            );
            return None;
        }
        if !rows.iter().any(|row| row.separator) {
            tracing::debug!(
                start = block.start,
                end = block.end,
                "pipe block has no separator row; leaving untouched"
            );
            return None;
        }

        let layout = ColumnLayout::measure(&rows, &self.rules);
        Some(TableAnalysis {
            block,
            rows,
            layout,
        })
    }

    /// Every table in the document, in order, skipping fenced code per the rules.
    pub fn analyze_all<S: LineSource + ?Sized>(&self, source: &S) -> Vec<TableAnalysis> {
        let fenced = if self.rules.skip_fenced_code {
            fenced_lines(source)
        } else {
            vec![false; source.line_count()]
        };

        let mut tables = Vec::new();
        let mut line = 0;
        while line < source.line_count() {
            if fenced[line] {
                line += 1;
                continue;
            }
            let Some(block) = find_table_block(source, line) else {
                line += 1;
                continue;
            };
            tables.extend(self.analyze_block(source, block));
            line = block.end + 1;
        }
        tables
    }

    /// Format the table around `line`, remapping `cursor` when its line is rewritten.
    pub fn format_at_line<S: LineSource + ?Sized>(
        &self,
        source: &S,
        line: usize,
        cursor: Option<Cursor>,
    ) -> Option<TableEdit> {
        let analysis = self.analyze(source, line)?;
        Some(self.render(source, analysis, cursor))
    }

    /// Format an already located block.
    pub fn format_block<S: LineSource + ?Sized>(
        &self,
        source: &S,
        block: TableBlock,
        cursor: Option<Cursor>,
    ) -> Option<TableEdit> {
        let analysis = self.analyze_block(source, block)?;
        Some(self.render(source, analysis, cursor))
    }

    /// Render an analysis into the replacements that align it.
    pub fn render<S: LineSource + ?Sized>(
        &self,
        source: &S,
        analysis: TableAnalysis,
        cursor: Option<Cursor>,
    ) -> TableEdit {
        let mut replacements = Vec::new();
        for row in &analysis.rows {
            let original = source.line(row.line);
            let text = analysis.layout.render(row, &self.rules);
            if text != original {
                tracing::trace!(line = row.line, %text, "rewriting table row");
                replacements.push(Replacement {
                    line: row.line,
                    original: original.to_string(),
                    text,
                });
            }
        }

        let cursor = cursor.and_then(|cursor| {
            let replacement = replacements.iter().find(|r| r.line == cursor.line)?;
            let column = remap_column(&replacement.original, &replacement.text, cursor.column);
            Some(Cursor::new(cursor.line, column))
        });

        tracing::debug!(
            start = analysis.block.start,
            end = analysis.block.end,
            changed = replacements.len(),
            "formatted table block"
        );

        TableEdit {
            block: analysis.block,
            replacements,
            cursor,
        }
    }
}

/// Format the table around `line` with default rules.
pub fn format_table_at_line<S: LineSource + ?Sized>(source: &S, line: usize) -> Option<TableEdit> {
    TableFormatter::default().format_at_line(source, line, None)
}
