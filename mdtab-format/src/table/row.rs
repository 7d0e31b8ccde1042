//! Splitting pipe lines into cells

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SEPARATOR_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:?-+:?$").unwrap());

/// One parsed line of a pipe block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Line index in the document
    pub line: usize,
    /// Trimmed cell texts
    pub cells: Vec<String>,
    /// Whether every cell is an alignment marker
    pub separator: bool,
}

impl Row {
    /// Parse `text` as a row, `None` when it has no pipe or no cells at all.
    pub fn parse(line: usize, text: &str) -> Option<Self> {
        let cells = parse_row(text)?;
        if cells.is_empty() {
            return None;
        }
        let separator = is_separator_row(&cells[..]);
        Some(Self {
            line,
            cells,
            separator,
        })
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Column alignment declared by a separator cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    None,
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Read the colons of a separator cell (`:--`, `--:`, `:-:`).
    pub fn from_marker(cell: &str) -> Self {
        let marker = strip_whitespace(cell);
        match (marker.starts_with(':'), marker.ends_with(':')) {
            (true, true) if marker.len() > 1 => Alignment::Center,
            (true, _) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }

    /// Build a marker exactly `width` characters wide (at least three).
    pub fn marker(&self, width: usize) -> String {
        let width = width.max(3);
        match self {
            Alignment::None => "-".repeat(width),
            Alignment::Left => format!(":{}", "-".repeat(width - 1)),
            Alignment::Right => format!("{}:", "-".repeat(width - 1)),
            Alignment::Center => format!(":{}:", "-".repeat(width - 2)),
        }
    }
}

/// Split a line on `|` into trimmed cells.
///
/// A leading and a trailing empty cell (from `|...|` framing) are dropped once each. Returns
/// `None` for lines without a pipe.
pub fn parse_row(line: &str) -> Option<Vec<String>> {
    if !line.contains('|') {
        return None;
    }

    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.first().is_some_and(|cell| cell.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.trim().is_empty()) {
        cells.pop();
    }

    Some(cells.into_iter().map(|cell| cell.trim().to_string()).collect())
}

/// Whether every cell is an alignment marker (`---`, `:--`, `--:`, `:-:`).
pub fn is_separator_row<S: AsRef<str>>(cells: &[S]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| SEPARATOR_CELL.is_match(&strip_whitespace(cell.as_ref())))
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
