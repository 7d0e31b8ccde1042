//! Locating the pipe block around a line

use crate::document::LineSource;
use serde::Serialize;

/// Inclusive range of lines that make up one pipe block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    pub start: usize,
    pub end: usize,
}

impl TableBlock {
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }

    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Whether a line starts a code fence.
pub fn is_fence(line: &str) -> bool {
    line.starts_with("```")
}

/// Whether `line` sits inside a fenced code block.
///
/// Counts fence lines from the top of the document through `line` itself, so both an opening
/// fence and the lines after it report `true` while a closing fence reports `false`.
pub fn is_in_fenced_code_block<S: LineSource + ?Sized>(source: &S, line: usize) -> bool {
    let last = line.min(source.line_count().saturating_sub(1));
    let fences = (0..=last)
        .filter(|&index| is_fence(source.line(index)))
        .count();
    fences % 2 == 1
}

/// Per-line fence state for the whole document, computed in one pass.
pub fn fenced_lines<S: LineSource + ?Sized>(source: &S) -> Vec<bool> {
    let mut in_fence = false;
    (0..source.line_count())
        .map(|index| {
            if is_fence(source.line(index)) {
                in_fence = !in_fence;
            }
            in_fence
        })
        .collect()
}

/// Find the contiguous pipe block around `line`.
///
/// Returns `None` when the line is out of range or holds no `|`. Blank and pipe-free lines end
/// the block in both directions.
pub fn find_table_block<S: LineSource + ?Sized>(source: &S, line: usize) -> Option<TableBlock> {
    if !source.line_at(line)?.contains('|') {
        return None;
    }

    let mut start = line;
    while start > 0 && source.line(start - 1).contains('|') {
        start -= 1;
    }

    let mut end = line;
    while end + 1 < source.line_count() && source.line(end + 1).contains('|') {
        end += 1;
    }

    Some(TableBlock { start, end })
}
