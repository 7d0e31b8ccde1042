//! Property tests for the table formatter invariants.

use mdtab_format::transforms::format_text;
use mdtab_format::width::display_width;
use mdtab_format::TableRules;
use proptest::prelude::*;

/// Any cell content the formatter measures differently: plain text (with CJK, emoji and
/// combining marks), dates, date-times, grouped numbers and decimals.
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z日本😀 ]{0,5}(e\u{301})?",
        1 => "20[0-9]{2}-[01][0-9]-[0-3][0-9]( [0-2][0-9]:[0-5][0-9](:[0-5][0-9])?)?",
        1 => "[1-9][0-9]{0,2}(,[0-9]{3}){1,2}(\\.[0-9]{1,2})?",
        1 => "[0-9]{1,3}\\.[0-9]{1,3}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("-"), Just(":-"), Just("-:"), Just(":-:")].prop_map(String::from)
}

/// A separator row plus rows whose cell counts range from one up to the column count.
fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..5).prop_flat_map(|columns| {
        (
            prop::collection::vec(separator_strategy(), columns..=columns),
            prop::collection::vec(prop::collection::vec(cell_strategy(), 1..=columns), 1..5),
        )
    })
}

fn render_loose((separator, rows): &(Vec<String>, Vec<Vec<String>>)) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (index, cells) in rows.iter().enumerate() {
        lines.push(format!("|{}|", cells.join("|")));
        if index == 0 {
            lines.push(format!("|{}|", separator.join("|")));
        }
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

proptest! {
    #[test]
    fn test_formatting_is_idempotent(table in table_strategy()) {
        let rules = TableRules::default();
        let once = format_text(&render_loose(&table), &rules).unwrap();
        let twice = format_text(&once, &rules).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_formatted_rows_share_one_width(table in table_strategy()) {
        let formatted = format_text(&render_loose(&table), &TableRules::default()).unwrap();
        let widths: Vec<usize> = formatted.lines().map(display_width).collect();
        prop_assert_eq!(widths.len(), table.1.len() + 1);
        prop_assert!(widths.iter().all(|&width| width == widths[0]));
        for line in formatted.lines() {
            prop_assert!(line.starts_with("| "));
            prop_assert!(line.ends_with(" |"));
        }
    }

    #[test]
    fn test_text_without_pipes_is_untouched(lines in prop::collection::vec("[a-z ,]{0,20}", 0..6)) {
        let text = lines.join("\n");
        prop_assert_eq!(format_text(&text, &TableRules::default()).unwrap(), text);
    }
}
