//! Display width of cell text in monospace columns
//!
//! Widths follow what an editor with a CJK-capable monospace font actually draws: East Asian
//! wide and fullwidth characters take two columns, combining marks and joiners take none,
//! everything else takes one. The explicit ranges below cover the characters editors get
//! wrong most often; `unicode-width` fills in the remaining wide code points.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthChar;

const ZERO_WIDTH_RANGES: &[(u32, u32)] = &[
    (0x0300, 0x036F),   // combining diacritical marks
    (0x1AB0, 0x1AFF),   // combining diacritical marks extended
    (0x1DC0, 0x1DFF),   // combining diacritical marks supplement
    (0x200B, 0x200D),   // ZWSP, ZWNJ, ZWJ
    (0x2060, 0x2060),   // word joiner
    (0x20D0, 0x20FF),   // combining marks for symbols
    (0xFE00, 0xFE0F),   // variation selectors
    (0xFE20, 0xFE2F),   // combining half marks
    (0xFEFF, 0xFEFF),   // zero width no-break space
    (0xE0100, 0xE01EF), // variation selectors supplement
];

const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // Hangul Jamo initials
    (0x2E80, 0x303E),   // CJK radicals, Kangxi, CJK symbols and punctuation
    (0x3041, 0x33FF),   // Hiragana, Katakana, Bopomofo, CJK compatibility
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi
    (0xA960, 0xA97F),   // Hangul Jamo extended A
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x1F300, 0x1F64F), // pictographs, emoticons
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x20000, 0x3FFFD), // CJK extensions B and later
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges
        .iter()
        .any(|&(start, end)| code >= start && code <= end)
}

/// Whether `c` draws with no width of its own (combining marks, selectors, joiners).
pub fn is_zero_width(c: char) -> bool {
    in_ranges(c, ZERO_WIDTH_RANGES)
}

/// Whether `c` occupies two monospace columns.
pub fn is_full_width(c: char) -> bool {
    char_width(c) == 2
}

/// Width of a single code point: 0, 1 or 2.
pub fn char_width(c: char) -> usize {
    if is_zero_width(c) {
        0
    } else if in_ranges(c, WIDE_RANGES) || UnicodeWidthChar::width(c) == Some(2) {
        2
    } else {
        1
    }
}

/// Number of monospace columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Whether any character of `text` is double width.
pub fn contains_full_width(text: &str) -> bool {
    text.chars().any(is_full_width)
}

/// Shape of a cell's content, as far as the width overlay cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellToken {
    /// `2024-01-31`
    Date,
    /// `2024-01-31 09:30`
    DateTimeMinutes,
    /// `2024-01-31T09:30:15`
    DateTimeSeconds,
    /// `1,234` or `-12,345.67`
    GroupedNumber,
    /// `3.14`
    Decimal,
    Text,
}

static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static DATE_TIME_MINUTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}$").unwrap());
static DATE_TIME_SECONDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}[ T][0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap()
});
static GROUPED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").unwrap());

/// Classify trimmed cell content.
pub fn classify(text: &str) -> CellToken {
    if DATE.is_match(text) {
        CellToken::Date
    } else if DATE_TIME_MINUTES.is_match(text) {
        CellToken::DateTimeMinutes
    } else if DATE_TIME_SECONDS.is_match(text) {
        CellToken::DateTimeSeconds
    } else if GROUPED_NUMBER.is_match(text) {
        CellToken::GroupedNumber
    } else if DECIMAL.is_match(text) {
        CellToken::Decimal
    } else {
        CellToken::Text
    }
}

/// Width a cell claims when sizing its column.
///
/// With `heuristics` on, dates and date-times claim their fixed widths and thousands-grouped
/// numbers claim one extra column, so numeric columns keep their size while digits are typed.
/// Padding always fills against [`display_width`], so the extra column shows up as one more
/// trailing space rather than as misalignment.
pub fn measure_cell(text: &str, heuristics: bool) -> usize {
    let raw = display_width(text);
    if !heuristics {
        return raw;
    }
    match classify(text) {
        CellToken::Date => 10,
        CellToken::DateTimeMinutes => 16,
        CellToken::DateTimeSeconds => 19,
        CellToken::GroupedNumber => raw + 1,
        CellToken::Decimal | CellToken::Text => raw,
    }
}
