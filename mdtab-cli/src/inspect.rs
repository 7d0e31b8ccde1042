//! CLI inspection views
//!
//! Each view is a subject + format combination (e.g., "table-simple", "decorations-json").
//! They show what the formatter sees in a document without changing it:
//!
//! - `table-*`: every table block with its rows, column widths and alignments
//! - `decorations-*`: the spans a host would decorate (checked tasks, headings, code, rules)
//!
//! ## Extra Parameters
//!
//! - `line`: 1-based line; `table-*` views only show the table containing it
//! - `editing-line`: 1-based line holding the caret, for `decorations-*`
//!
//! Example: `mdtab inspect notes.md table-json --extra-line 12`

use mdtab_format::decorations::{scan_decorations, Decoration, DecorationKind};
use mdtab_format::table::TableAnalysis;
use mdtab_format::{DecorationRules, Document, TableFormatter, TableRules};
use std::collections::HashMap;

/// All available inspection views
pub const AVAILABLE_VIEWS: &[&str] = &[
    "table-simple",
    "table-json",
    "decorations-simple",
    "decorations-json",
];

/// View used when none is named on the command line
pub const DEFAULT_VIEW: &str = "table-simple";

/// Everything a view needs besides the source text.
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub table: TableRules,
    pub decorations: DecorationRules,
    /// 0-based line restricting `table-*` views
    pub line: Option<usize>,
    /// 0-based line holding the caret
    pub editing_line: Option<usize>,
}

impl InspectOptions {
    /// Read the `line` and `editing-line` extra parameters (1-based) on top of the rules.
    pub fn from_params(
        table: TableRules,
        decorations: DecorationRules,
        params: &HashMap<String, String>,
    ) -> Result<Self, String> {
        Ok(Self {
            table,
            decorations,
            line: line_param(params, "line")?,
            editing_line: line_param(params, "editing-line")?,
        })
    }
}

fn line_param(params: &HashMap<String, String>, key: &str) -> Result<Option<usize>, String> {
    let Some(raw) = params.get(key) else {
        return Ok(None);
    };
    match raw.parse::<usize>() {
        Ok(line) if line > 0 => Ok(Some(line - 1)),
        _ => Err(format!(
            "Invalid value '{raw}' for --extra-{key}: expected a line number starting at 1"
        )),
    }
}

/// Execute a named view on a source text
///
/// # Returns
///
/// The rendered view, or an error message for unknown views and missing tables
pub fn execute_view(source: &str, view: &str, options: &InspectOptions) -> Result<String, String> {
    let doc = Document::from_text(source);

    match view {
        "table-simple" => Ok(tables_to_simple(&collect_tables(&doc, options)?)),
        "table-json" => serde_json::to_string_pretty(&collect_tables(&doc, options)?)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "decorations-simple" => Ok(decorations_to_simple(&scan_decorations(
            &doc,
            options.editing_line,
            &options.decorations,
        ))),
        "decorations-json" => serde_json::to_string_pretty(&scan_decorations(
            &doc,
            options.editing_line,
            &options.decorations,
        ))
        .map_err(|e| format!("JSON serialization failed: {e}")),
        _ => Err(format!(
            "Unknown view '{view}'. Available views: {}",
            AVAILABLE_VIEWS.join(", ")
        )),
    }
}

fn collect_tables(doc: &Document, options: &InspectOptions) -> Result<Vec<TableAnalysis>, String> {
    let formatter = TableFormatter::new(options.table.clone());
    match options.line {
        Some(line) => formatter
            .analyze(doc, line)
            .map(|table| vec![table])
            .ok_or_else(|| format!("No table at line {}", line + 1)),
        None => Ok(formatter.analyze_all(doc)),
    }
}

fn tables_to_simple(tables: &[TableAnalysis]) -> String {
    if tables.is_empty() {
        return "No tables found\n".to_string();
    }

    let mut out = String::new();
    for table in tables {
        let layout = &table.layout;
        out.push_str(&format!(
            "table lines {}-{}, {} columns\n",
            table.block.start + 1,
            table.block.end + 1,
            layout.column_count()
        ));

        let widths: Vec<String> = layout
            .widths
            .iter()
            .zip(&layout.full_width)
            .map(|(width, &wide)| if wide { format!("{width}*") } else { width.to_string() })
            .collect();
        out.push_str(&format!("  widths: {}\n", widths.join(", ")));

        let alignments: Vec<String> = layout
            .alignments
            .iter()
            .map(|alignment| format!("{alignment:?}").to_lowercase())
            .collect();
        out.push_str(&format!("  alignments: {}\n", alignments.join(", ")));

        for row in &table.rows {
            let marker = if row.separator { " (separator)" } else { "" };
            out.push_str(&format!(
                "  {}{marker}: {}\n",
                row.line + 1,
                row.cells.join(" | ")
            ));
        }
    }
    out
}

fn decorations_to_simple(decorations: &[Decoration]) -> String {
    let mut out = String::new();
    for decoration in decorations {
        let kind = match decoration.kind {
            DecorationKind::CheckedTask => "checked-task".to_string(),
            DecorationKind::Heading { level } => format!("heading({level})"),
            DecorationKind::CodeBlock => "code-block".to_string(),
            DecorationKind::HorizontalRule => "horizontal-rule".to_string(),
        };
        out.push_str(&format!(
            "{}:{}-{}:{} {kind}\n",
            decoration.start.line + 1,
            decoration.start.column,
            decoration.end.line + 1,
            decoration.end.column
        ));
    }
    out
}
