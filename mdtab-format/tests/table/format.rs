use crate::common::{apply_edit, joined};
use insta::assert_snapshot;
use mdtab_format::table::format_table_at_line;
use mdtab_format::width::display_width;
use mdtab_format::{TableFormatter, TableRules};

#[test]
fn test_basic_table_is_aligned() {
    let lines = ["|a|bb|", "|---|---|", "|c|dddd|"];
    let edit = format_table_at_line(&lines[..], 1).expect("a table");
    let formatted = apply_edit(&lines, &edit);

    assert_snapshot!(joined(&formatted), @r"
    | a   | bb   |
    | --- | ---- |
    | c   | dddd |
    ");
}

#[test]
fn test_alignment_markers_are_kept_and_stretched() {
    let lines = ["|l|c|r|", "|:-|:-:|-:|", "|long text|x|y|"];
    let edit = format_table_at_line(&lines[..], 0).expect("a table");
    let formatted = apply_edit(&lines, &edit);

    assert_snapshot!(joined(&formatted), @r"
    | l         | c   | r   |
    | :-------- | :-: | --: |
    | long text | x   | y   |
    ");
}

#[test]
fn test_unframed_rows_gain_pipes() {
    let lines = ["a | b", "--|--", "c|d"];
    let edit = format_table_at_line(&lines[..], 2).expect("a table");
    assert_eq!(
        apply_edit(&lines, &edit),
        vec!["| a   | b   |", "| --- | --- |", "| c   | d   |"]
    );
}

#[test]
fn test_cjk_column_is_padded_with_ideographic_spaces() {
    let lines = ["|日本語|x|", "|---|---|", "|日|yy|"];
    let edit = format_table_at_line(&lines[..], 0).expect("a table");
    let formatted = apply_edit(&lines, &edit);

    assert_eq!(formatted[0], "| 日本語 | x   |");
    assert_eq!(formatted[1], "| ------ | --- |");
    assert_eq!(formatted[2], "| 日\u{3000}\u{3000} | yy  |");

    for line in &formatted {
        assert_eq!(display_width(line), display_width(&formatted[1]));
    }
}

#[test]
fn test_fullwidth_padding_can_be_disabled() {
    let lines = ["|日本語|", "|---|", "|日|"];
    let formatter = TableFormatter::new(TableRules {
        fullwidth_padding: false,
        ..TableRules::default()
    });
    let edit = formatter.format_at_line(&lines[..], 0, None).expect("a table");
    assert_eq!(apply_edit(&lines, &edit)[2], "| 日     |");
}

#[test]
fn test_lone_pipe_row_is_left_alone() {
    let lines = ["|just| text|"];
    assert!(format_table_at_line(&lines[..], 0).is_none());
}

#[test]
fn test_prose_with_pipes_is_left_alone() {
    let lines = ["", "cats | dogs", "apples | pears", ""];
    assert!(format_table_at_line(&lines[..], 1).is_none());
    assert!(format_table_at_line(&lines[..], 0).is_none());
}

#[test]
fn test_table_inside_fence_is_left_alone() {
    let lines = ["intro", "```", "|a|b|", "|-|-|", "```", "|a|b|", "|-|-|"];
    assert!(format_table_at_line(&lines[..], 2).is_none());

    let edit = format_table_at_line(&lines[..], 6).expect("table after the fence");
    assert_eq!(edit.block.start, 5);
}

#[test]
fn test_formatted_table_produces_no_changes() {
    let lines = ["|a|bb|", "|---|---|", "|c|dddd|"];
    let edit = format_table_at_line(&lines[..], 0).expect("a table");
    let formatted = apply_edit(&lines, &edit);

    let again = format_table_at_line(&formatted, 0).expect("still a table");
    assert!(again.is_noop());
}

#[test]
fn test_dates_and_grouped_numbers_size_their_columns() {
    let lines = ["|when|n|", "|-|-|", "|2024-01-05|1,234|"];
    let edit = format_table_at_line(&lines[..], 0).expect("a table");
    assert_eq!(
        apply_edit(&lines, &edit),
        vec![
            "| when       | n      |",
            "| ---------- | ------ |",
            "| 2024-01-05 | 1,234  |",
        ]
    );

    let plain = TableFormatter::new(TableRules {
        token_heuristics: false,
        ..TableRules::default()
    });
    let edit = plain.format_at_line(&lines[..], 0, None).expect("a table");
    assert_eq!(apply_edit(&lines, &edit)[2], "| 2024-01-05 | 1,234 |");
}

#[test]
fn test_combining_marks_do_not_widen_cells() {
    let lines = ["|e\u{301}|", "|---|"];
    let edit = format_table_at_line(&lines[..], 0).expect("a table");
    assert_eq!(apply_edit(&lines, &edit)[0], "| e\u{301}   |");
}

#[test]
fn test_short_rows_are_filled_with_empty_cells() {
    let lines = ["|a|b|c|", "|---|---|---|", "|x|"];
    let edit = format_table_at_line(&lines[..], 2).expect("a table");
    assert_eq!(apply_edit(&lines, &edit)[2], "| x   |     |     |");
}
