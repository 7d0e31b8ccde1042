use mdtab_format::table::Cursor;
use mdtab_format::TableFormatter;

fn remapped(lines: &[&str], cursor: Cursor) -> Option<Cursor> {
    TableFormatter::default()
        .format_at_line(lines, cursor.line, Some(cursor))
        .and_then(|edit| edit.cursor)
}

#[test]
fn test_cursor_stays_after_typed_text() {
    let lines = ["|axyz|b|", "| --- | --- |"];
    assert_eq!(remapped(&lines, Cursor::new(0, 5)), Some(Cursor::new(0, 6)));

    let lines = ["| a   | bxyz |", "| --- | --- |"];
    // the separator is rewritten, the edited row is not
    assert_eq!(remapped(&lines, Cursor::new(0, 12)), None);
}

#[test]
fn test_cursor_in_unframed_row() {
    let lines = ["a|b", "-|-"];
    // after "b"
    assert_eq!(remapped(&lines, Cursor::new(0, 3)), Some(Cursor::new(0, 9)));
    // after "a"
    assert_eq!(remapped(&lines, Cursor::new(0, 1)), Some(Cursor::new(0, 3)));
}

#[test]
fn test_cursor_on_separator_row() {
    let lines = ["|abcd|", "|-|"];
    assert_eq!(remapped(&lines, Cursor::new(1, 2)), Some(Cursor::new(1, 3)));
}

#[test]
fn test_cursor_past_closing_pipe_goes_to_line_end() {
    let lines = ["|a|", "|-|"];
    assert_eq!(remapped(&lines, Cursor::new(0, 3)), Some(Cursor::new(0, 7)));
}
