//! Error types for document edits

use std::fmt;

/// Errors that can occur while applying edits or validating rules
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// An edit targets a line past the end of the document
    LineOutOfRange { line: usize, line_count: usize },
    /// The line no longer holds the text the edit was computed from
    StaleEdit { line: usize },
    /// Rules that cannot produce a well-formed table
    InvalidRules(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::LineOutOfRange { line, line_count } => {
                write!(f, "Line {line} is out of range (document has {line_count} lines)")
            }
            FormatError::StaleEdit { line } => {
                write!(f, "Line {line} changed since the edit was computed")
            }
            FormatError::InvalidRules(msg) => write!(f, "Invalid rules: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
