//! Column sizing, padding and row rendering

use super::row::{Alignment, Row};
use crate::rules::TableRules;
use crate::width::{contains_full_width, display_width, measure_cell};
use serde::Serialize;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Computed shape of every column in a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    /// Content width per column, framing spaces excluded
    pub widths: Vec<usize>,
    /// Whether any content cell of the column holds a double-width character
    pub full_width: Vec<bool>,
    /// Alignment declared by the first separator row
    pub alignments: Vec<Alignment>,
}

impl ColumnLayout {
    /// Size columns from the content rows; separator rows only contribute to the column count.
    pub fn measure(rows: &[Row], rules: &TableRules) -> Self {
        let columns = rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        let mut widths = vec![rules.min_width(); columns];
        let mut full_width = vec![false; columns];

        for row in rows.iter().filter(|row| !row.separator) {
            for (column, cell) in row.cells.iter().enumerate() {
                widths[column] = widths[column].max(measure_cell(cell, rules.token_heuristics));
                full_width[column] |= contains_full_width(cell);
            }
        }

        let alignments = match rows.iter().find(|row| row.separator) {
            Some(separator) => (0..columns)
                .map(|column| Alignment::from_marker(separator.cell(column)))
                .collect(),
            None => vec![Alignment::None; columns],
        };

        Self {
            widths,
            full_width,
            alignments,
        }
    }

    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Render `row` against this layout, always framed with pipes.
    pub fn render(&self, row: &Row, rules: &TableRules) -> String {
        let mut out = String::from("|");
        for (column, &width) in self.widths.iter().enumerate() {
            let cell = row.cell(column);
            let body = if row.separator {
                Alignment::from_marker(cell).marker(width)
            } else {
                let wide = rules.fullwidth_padding && self.full_width[column];
                pad_cell(cell, width, wide)
            };
            out.push(' ');
            out.push_str(&body);
            out.push_str(" |");
        }
        out
    }
}

/// Left align `cell` within `width` columns.
///
/// With `full_width` set the padding uses ideographic spaces (two columns each) and a single
/// ASCII space for an odd remainder. Cells already as wide as `width` come back unchanged.
pub fn pad_cell(cell: &str, width: usize, full_width: bool) -> String {
    let mut remaining = width.saturating_sub(display_width(cell));
    let mut padded = String::with_capacity(cell.len() + remaining);
    padded.push_str(cell);

    if full_width {
        while remaining >= 2 {
            padded.push(IDEOGRAPHIC_SPACE);
            remaining -= 2;
        }
    }
    padded.extend(std::iter::repeat(' ').take(remaining));
    padded
}
