//! CSV to table conversion over whole texts.

use mdtab_format::transforms::{convert_csv_text, format_text};
use mdtab_format::{CsvRules, TableRules};

#[test]
fn test_converted_block_is_already_formatted() {
    let source = "Prices:\n\nitem,price,sold\napple,1.25,2024-01-05\npear,12,\n\nafter\n";
    let converted = convert_csv_text(source, 3, &CsvRules::default(), &TableRules::default())
        .expect("splice to apply")
        .expect("a delimited block");

    assert_eq!(
        converted,
        "Prices:\n\n\
         | item  | price | sold       |\n\
         | ----- | ----- | ---------- |\n\
         | apple | 1.25  | 2024-01-05 |\n\
         | pear  | 12    |            |\n\
         \nafter\n"
    );
    assert_eq!(
        format_text(&converted, &TableRules::default()).unwrap(),
        converted
    );
}

#[test]
fn test_tab_delimited_block() {
    let rules = CsvRules {
        delimiter: '\t',
        min_rows: 2,
    };
    let converted = convert_csv_text("名前\tx\n日本\ty\n", 0, &rules, &TableRules::default())
        .unwrap()
        .unwrap();
    assert_eq!(
        converted,
        "| 名前 | x   |\n| ---- | --- |\n| 日本 | y   |\n"
    );
}

#[test]
fn test_fenced_block_is_not_converted() {
    let source = "```\na,b\nc,d\n```\n";
    let converted =
        convert_csv_text(source, 1, &CsvRules::default(), &TableRules::default()).unwrap();
    assert_eq!(converted, None);
}
