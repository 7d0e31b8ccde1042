use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// Narrowest column the formatter emits; `---` must fit in every separator cell.
pub const MIN_SEPARATOR_WIDTH: usize = 3;

/// Configuration for the table formatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRules {
    /// Minimum content width of a column (never below 3)
    pub min_column_width: usize,

    /// Pad columns holding fullwidth text with ideographic spaces
    pub fullwidth_padding: bool,

    /// Size columns with the date/number width overlay
    pub token_heuristics: bool,

    /// Leave lines inside fenced code blocks alone
    pub skip_fenced_code: bool,
}

impl TableRules {
    /// The minimum column width actually used, clamped so separator markers always fit.
    pub fn min_width(&self) -> usize {
        self.min_column_width.max(MIN_SEPARATOR_WIDTH)
    }
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            min_column_width: MIN_SEPARATOR_WIDTH,
            fullwidth_padding: true,
            token_heuristics: true,
            skip_fenced_code: true,
        }
    }
}

/// Configuration for CSV to table conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRules {
    /// Cell delimiter
    pub delimiter: char,

    /// Fewest consecutive delimited lines that count as a table
    pub min_rows: usize,
}

impl CsvRules {
    /// Reject delimiters that cannot separate cells of a single line.
    pub fn validate(&self) -> Result<(), FormatError> {
        match self.delimiter {
            '|' => Err(FormatError::InvalidRules(
                "the pipe character cannot be used as a CSV delimiter".to_string(),
            )),
            '\n' | '\r' => Err(FormatError::InvalidRules(
                "a line break cannot be used as a CSV delimiter".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for CsvRules {
    fn default() -> Self {
        Self {
            delimiter: ',',
            min_rows: 2,
        }
    }
}

/// Configuration for decoration scanning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationRules {
    /// Do not strike through the task on the line being edited
    pub skip_editing_line: bool,
}

impl Default for DecorationRules {
    fn default() -> Self {
        Self {
            skip_editing_line: true,
        }
    }
}
