//! Line scanning for editor decorations
//!
//! Hosts paint checked tasks struck through, headings emphasized, fenced code with a
//! background and horizontal rules as rules. This module only finds the spans; what they
//! look like is the host's business.

use crate::document::LineSource;
use crate::rules::DecorationRules;
use crate::table::block::is_fence;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CHECKED_TASK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s\[[xX]\]\s*").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+.+").unwrap());
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DecorationKind {
    /// Text after a `- [x]` marker
    CheckedTask,
    Heading { level: u8 },
    /// Opening fence through closing fence
    CodeBlock,
    HorizontalRule,
}

/// A line/char position; columns count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoration {
    #[serde(flatten)]
    pub kind: DecorationKind,
    pub start: Position,
    pub end: Position,
}

impl Decoration {
    fn whole_line(kind: DecorationKind, line: usize, text: &str) -> Self {
        Self {
            kind,
            start: Position { line, column: 0 },
            end: Position {
                line,
                column: text.chars().count(),
            },
        }
    }
}

/// Scan every line for decorations, in document order.
///
/// `editing_line` is the line holding the caret; with `skip_editing_line` its checked-task
/// strike-through is left out so the text being typed stays readable.
pub fn scan_decorations<S: LineSource + ?Sized>(
    source: &S,
    editing_line: Option<usize>,
    rules: &DecorationRules,
) -> Vec<Decoration> {
    let mut decorations = Vec::new();
    let mut open_fence: Option<usize> = None;

    for line in 0..source.line_count() {
        let text = source.line(line);

        if is_fence(text) {
            match open_fence.take() {
                Some(start) => decorations.push(Decoration {
                    kind: DecorationKind::CodeBlock,
                    start: Position {
                        line: start,
                        column: 0,
                    },
                    end: Position {
                        line,
                        column: text.chars().count(),
                    },
                }),
                None => open_fence = Some(line),
            }
            continue;
        }

        let skip_task = rules.skip_editing_line && editing_line == Some(line);
        if let Some(found) = CHECKED_TASK.find(text).filter(|_| !skip_task) {
            let start = text[..found.end()].chars().count();
            let end = text.chars().count();
            if start < end {
                decorations.push(Decoration {
                    kind: DecorationKind::CheckedTask,
                    start: Position {
                        line,
                        column: start,
                    },
                    end: Position { line, column: end },
                });
            }
        }

        if let Some(captures) = HEADING.captures(text) {
            let level = captures[1].len() as u8;
            decorations.push(Decoration::whole_line(
                DecorationKind::Heading { level },
                line,
                text,
            ));
        }

        if HORIZONTAL_RULE.is_match(text.trim()) {
            decorations.push(Decoration::whole_line(
                DecorationKind::HorizontalRule,
                line,
                text,
            ));
        }
    }

    if let Some(start) = open_fence {
        let last = source.line_count().saturating_sub(1);
        decorations.push(Decoration {
            kind: DecorationKind::CodeBlock,
            start: Position {
                line: start,
                column: 0,
            },
            end: Position {
                line: last,
                column: source.line(last).chars().count(),
            },
        });
    }

    decorations
}
