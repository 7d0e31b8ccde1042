//! Line-addressable documents and the edits computed against them
//!
//! The formatter only ever reads lines by index and answers with edits. Hosts that already
//! own a buffer implement [`LineSource`] over it; everything else (the CLI, tests) uses
//! [`Document`], which can also apply the edits.

use crate::error::FormatError;
use serde::Serialize;

/// Read-only, line-addressable view over a text buffer.
pub trait LineSource {
    /// Number of lines in the buffer
    fn line_count(&self) -> usize;

    /// Text of the line at `index`, without its line terminator
    fn line_at(&self, index: usize) -> Option<&str>;

    /// Like [`LineSource::line_at`], but an out of range index reads as an empty line
    fn line(&self, index: usize) -> &str {
        self.line_at(index).unwrap_or_default()
    }
}

impl LineSource for [String] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl LineSource for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl LineSource for [&str] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

impl LineSource for Vec<&str> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

/// Replace the full text of one line.
///
/// `original` is the text the replacement was computed from; [`Document::apply`] refuses the
/// whole batch when any line no longer matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub line: usize,
    pub original: String,
    pub text: String,
}

/// Replace the inclusive line range `start..=end` with `lines` (which may differ in count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Splice {
    pub start: usize,
    pub end: usize,
    pub original: Vec<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// An owned, mutable document split into lines.
///
/// Every line keeps its own terminator (`None` for a final line without one), so text that
/// mixes `\n` and `\r\n` comes back from [`Document::to_text`] byte for byte wherever no line
/// was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    endings: Vec<Option<LineEnding>>,
}

impl Document {
    /// Split `text` into lines, remembering each line's terminator.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut endings = Vec::new();

        for chunk in text.split_inclusive('\n') {
            if let Some(body) = chunk.strip_suffix("\r\n") {
                lines.push(body.to_string());
                endings.push(Some(LineEnding::CrLf));
            } else if let Some(body) = chunk.strip_suffix('\n') {
                lines.push(body.to_string());
                endings.push(Some(LineEnding::Lf));
            } else {
                lines.push(chunk.to_string());
                endings.push(None);
            }
        }
        if lines.is_empty() {
            lines.push(String::new());
            endings.push(None);
        }

        Self { lines, endings }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let endings = vec![Some(LineEnding::Lf); lines.len()];
        Self { lines, endings }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Terminator used for lines the document gains, taken from the first terminated line.
    pub fn line_ending(&self) -> LineEnding {
        self.endings
            .iter()
            .flatten()
            .next()
            .copied()
            .unwrap_or(LineEnding::Lf)
    }

    /// Terminator of the line at `index`, `None` for an unterminated last line.
    pub fn ending_at(&self, index: usize) -> Option<LineEnding> {
        self.endings.get(index).copied().flatten()
    }

    /// Join the lines back into text, each with its own terminator.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (line, ending) in self.lines.iter().zip(&self.endings) {
            text.push_str(line);
            if let Some(ending) = ending {
                text.push_str(ending.as_str());
            }
        }
        text
    }

    /// Apply a batch of replacements atomically.
    ///
    /// Every replacement is validated first; if any targets a missing line or a line whose text
    /// changed since the batch was computed, nothing is modified.
    pub fn apply(&mut self, replacements: &[Replacement]) -> Result<(), FormatError> {
        for replacement in replacements {
            let current = self.line_at(replacement.line).ok_or(FormatError::LineOutOfRange {
                line: replacement.line,
                line_count: self.lines.len(),
            })?;
            if current != replacement.original {
                return Err(FormatError::StaleEdit {
                    line: replacement.line,
                });
            }
        }

        for replacement in replacements {
            self.lines[replacement.line] = replacement.text.clone();
        }
        Ok(())
    }

    /// Apply a splice after checking that the replaced range is still intact.
    pub fn splice(&mut self, splice: &Splice) -> Result<(), FormatError> {
        if splice.start > splice.end || splice.end >= self.lines.len() {
            return Err(FormatError::LineOutOfRange {
                line: splice.end,
                line_count: self.lines.len(),
            });
        }
        for (offset, expected) in splice.original.iter().enumerate() {
            let line = splice.start + offset;
            if line > splice.end || self.lines[line] != *expected {
                return Err(FormatError::StaleEdit { line });
            }
        }

        // Inserted lines use the document's ending; the last one inherits the terminator of
        // the last replaced line so an unterminated final line stays unterminated.
        let mut endings = vec![Some(self.line_ending()); splice.lines.len()];
        if let Some(last) = endings.last_mut() {
            *last = self.endings[splice.end];
        }

        self.lines
            .splice(splice.start..=splice.end, splice.lines.iter().cloned());
        self.endings.splice(splice.start..=splice.end, endings);
        Ok(())
    }
}

impl LineSource for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_text_with_trailing_newline() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.lines(), &["a".to_string(), "b".to_string()]);
        assert_eq!(doc.to_text(), "a\nb\n");
    }

    #[test]
    fn test_preserves_crlf_and_missing_final_newline() {
        let doc = Document::from_text("a\r\nb");
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
        assert_eq!(doc.line(1), "b");
        assert_eq!(doc.to_text(), "a\r\nb");
    }

    #[test]
    fn test_mixed_line_endings_survive_untouched() {
        let text = "no table\nline two\r\nlast";
        let doc = Document::from_text(text);
        assert_eq!(doc.lines(), &["no table", "line two", "last"]);
        assert_eq!(doc.ending_at(0), Some(LineEnding::Lf));
        assert_eq!(doc.ending_at(1), Some(LineEnding::CrLf));
        assert_eq!(doc.ending_at(2), None);
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_replacement_keeps_the_line_terminator() {
        let mut doc = Document::from_text("a\nb\r\nc\n");
        doc.apply(&[Replacement {
            line: 1,
            original: "b".to_string(),
            text: "B".to_string(),
        }])
        .unwrap();
        assert_eq!(doc.to_text(), "a\nB\r\nc\n");
    }

    #[test]
    fn test_splice_keeps_final_line_unterminated() {
        let mut doc = Document::from_text("x\r\na,b\r\nc,d");
        let splice = Splice {
            start: 1,
            end: 2,
            original: vec!["a,b".to_string(), "c,d".to_string()],
            lines: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        };
        doc.splice(&splice).unwrap();
        assert_eq!(doc.to_text(), "x\r\n1\r\n2\r\n3");
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let doc = Document::from_text("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.to_text(), "");
    }

    #[test]
    fn test_apply_is_atomic_on_stale_line() {
        let mut doc = Document::from_lines(["one", "two"]);
        let batch = vec![
            Replacement {
                line: 0,
                original: "one".to_string(),
                text: "ONE".to_string(),
            },
            Replacement {
                line: 1,
                original: "changed".to_string(),
                text: "TWO".to_string(),
            },
        ];

        assert_eq!(doc.apply(&batch), Err(FormatError::StaleEdit { line: 1 }));
        assert_eq!(doc.lines(), &["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_apply_rejects_out_of_range_line() {
        let mut doc = Document::from_lines(["one"]);
        let batch = vec![Replacement {
            line: 3,
            original: String::new(),
            text: "x".to_string(),
        }];
        assert_eq!(
            doc.apply(&batch),
            Err(FormatError::LineOutOfRange {
                line: 3,
                line_count: 1
            })
        );
    }

    #[test]
    fn test_splice_changes_line_count() {
        let mut doc = Document::from_lines(["keep", "a,b", "c,d", "tail"]);
        let splice = Splice {
            start: 1,
            end: 2,
            original: vec!["a,b".to_string(), "c,d".to_string()],
            lines: vec!["x".to_string(), "y".to_string(), "z".to_string()],
        };
        doc.splice(&splice).unwrap();
        assert_eq!(doc.lines(), &["keep", "x", "y", "z", "tail"]);
    }

    #[test]
    fn test_str_slices_are_line_sources() {
        let lines = ["a", "b"];
        let source: &[&str] = &lines;
        assert_eq!(source.line_count(), 2);
        assert_eq!(source.line_at(5), None);
        assert_eq!(source.line(5), "");
    }
}
