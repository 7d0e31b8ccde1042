//! Keeping the cursor in the same cell across a rewrite

use serde::Serialize;

/// Caret position; `column` counts chars from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Map a cursor column in `old` to the equivalent column in the rewritten `new` line.
///
/// The cell is found by counting pipes before the cursor in `old`; inside the cell the cursor
/// keeps its offset into the trimmed content, clamped to the new content. `new` is always a
/// framed line, so an unframed `old` line is shifted by one cell.
pub fn remap_column(old: &str, new: &str, column: usize) -> usize {
    let new_len = new.chars().count();
    let before: String = old.chars().take(column).collect();
    let pipes_before = before.matches('|').count();
    let framed = old.trim_start().starts_with('|');
    let cell = if framed { pipes_before } else { pipes_before + 1 };
    if cell == 0 {
        return 0;
    }

    let segments: Vec<&str> = new.split('|').collect();
    // The final segment is whatever follows the closing pipe.
    if cell >= segments.len() - 1 {
        return new_len;
    }

    let cell_start: usize = segments[..cell]
        .iter()
        .map(|segment| segment.chars().count() + 1)
        .sum();
    let relative = before
        .rsplit('|')
        .next()
        .unwrap_or("")
        .trim()
        .chars()
        .count();
    let segment = segments[cell];
    let content = segment.trim().chars().count();
    let lead = usize::from(!segment.is_empty());

    (cell_start + lead + relative.min(content)).min(new_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_offset_within_cell() {
        // cursor after "a" in the second cell
        assert_eq!(remap_column("|x| ab|", "| x   | ab  |", 5), 9);
        // cursor after "b"
        assert_eq!(remap_column("|x| ab|", "| x   | ab  |", 6), 10);
    }

    #[test]
    fn test_clamps_to_new_content_length() {
        assert_eq!(remap_column("| abc    |", "| abc |", 8), 5);
    }

    #[test]
    fn test_unframed_old_line_shifts_one_cell() {
        assert_eq!(remap_column("a | b", "| a   | b   |", 5), 9);
        assert_eq!(remap_column("a | b", "| a   | b   |", 1), 3);
    }

    #[test]
    fn test_cursor_before_first_pipe_goes_to_line_start() {
        assert_eq!(remap_column("  | a |", "| a   |", 1), 0);
    }

    #[test]
    fn test_cursor_after_last_pipe_goes_to_line_end() {
        assert_eq!(remap_column("| a |", "| a   |", 5), 7);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(remap_column("|日本|x|", "| 日本 | x   |", 3), 4);
    }
}
