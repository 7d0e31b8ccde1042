// Command-line interface for mdtab
//
// This binary exposes the table formatter to scripts, editors without a plugin host and CI.
// It reads a Markdown file, runs one of the library operations over it and writes the result
// to stdout, to a file (-o) or back to the input (--in-place).
//
// Usage:
//  mdtab format <input> [--line N [--cursor COL]] [-o PATH | --in-place] [--check]
//  mdtab csv <input> --line N [-o PATH | --in-place]
//  mdtab width <text>... [--cell]
//  mdtab inspect <input> [<view>]       - Show what the formatter sees (defaults to "table-simple")
//  mdtab --list-views                   - List available views
//
// Lines and columns on the command line are 1-based.
//
// Extra Parameters:
//
// Configuration overrides and view parameters are passed as --extra-<name> <value>.
// The CLI layer strips the "extra-" prefix, applies the keys it knows to the configuration and
// hands the rest to the inspect views.
// Example:
//  mdtab format notes.md --extra-min-width 5 --extra-fullwidth-padding false

use mdtab_cli::inspect::{self, InspectOptions};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdtab_config::{Loader, MdtabConfig, LOCAL_CONFIG_FILE};
use mdtab_format::transforms::{convert_csv_text, format_text, format_text_at_line};
use mdtab_format::width::{display_width, measure_cell};
use mdtab_format::{CsvRules, Cursor, DecorationRules, TableRules};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Path to the Markdown file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .conflicts_with("in-place")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("in-place")
                .long("in-place")
                .help("Rewrite the input file")
                .action(ArgAction::SetTrue),
        )
}

fn line_arg() -> Arg {
    Arg::new("line")
        .long("line")
        .value_name("N")
        .value_parser(clap::value_parser!(usize))
}

fn build_cli() -> Command {
    Command::new("mdtab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Align Markdown pipe tables")
        .long_about(
            "mdtab aligns Markdown pipe tables, CJK text included.\n\n\
            Commands:\n  \
            - format:  Align every table, or only the one around --line\n  \
            - csv:     Turn a block of comma separated lines into a table\n  \
            - width:   Print the display width of text\n  \
            - inspect: Show the tables and decorations the formatter sees\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdtab format notes.md                       # Print the formatted document\n  \
            mdtab format notes.md --in-place            # Rewrite notes.md\n  \
            mdtab format notes.md --check               # Exit 1 if anything would change\n  \
            mdtab csv notes.md --line 4 --in-place      # Convert the CSV block at line 4",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available inspect views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdtab.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(output_args(
            Command::new("format")
                .about("Align the tables of a Markdown file")
                .long_about(
                    "Align every pipe table of a Markdown file.\n\n\
                    With --line only the table containing that line is formatted. Add\n\
                    --cursor to get the caret column after the rewrite on stderr, the\n\
                    way an editor keeps the caret in its cell.\n\n\
                    Tables inside ``` fenced code blocks are left alone.",
                )
                .arg(input_arg("input"))
                .arg(line_arg().help("Only format the table containing this line (1-based)"))
                .arg(
                    Arg::new("cursor")
                        .long("cursor")
                        .value_name("COL")
                        .help("Caret column on --line (1-based); prints where it ends up")
                        .requires("line")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .help("Do not write anything; exit 1 when the file would change")
                        .conflicts_with_all(["output", "in-place"])
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(output_args(
            Command::new("csv")
                .about("Convert a block of delimited lines into a table")
                .arg(input_arg("input"))
                .arg(
                    line_arg()
                        .help("A line inside the delimited block (1-based)")
                        .required(true),
                ),
        ))
        .subcommand(
            Command::new("width")
                .about("Print the display width of text")
                .arg(
                    Arg::new("text")
                        .help("Text to measure")
                        .required(true)
                        .num_args(1..),
                )
                .arg(
                    Arg::new("cell")
                        .long("cell")
                        .help("Measure as a table cell (dates and grouped numbers get fixed widths)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show what the formatter sees in a Markdown file")
                .long_about(
                    "Views (subject-format):\n  \
                    - table-simple:       Tables with widths, alignments and rows (default)\n  \
                    - table-json:         The same as JSON\n  \
                    - decorations-simple: Decoration spans, one per line\n  \
                    - decorations-json:   The same as JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-line N          Only the table containing line N\n  \
                    --extra-editing-line N  Line holding the caret (decorations)",
                )
                .arg(input_arg("path"))
                .arg(
                    Arg::new("view")
                        .help("View to show. Defaults to 'table-simple'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-views") {
        handle_list_views_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    tracing::debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("format", sub_matches)) => handle_format_command(sub_matches, &config),
        Some(("csv", sub_matches)) => handle_csv_command(sub_matches, &config),
        Some(("width", sub_matches)) => {
            let texts: Vec<&String> = sub_matches
                .get_many::<String>("text")
                .map(|values| values.collect())
                .unwrap_or_default();
            let heuristics = config.table.token_heuristics;
            handle_width_command(&texts, sub_matches.get_flag("cell"), heuristics);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_VIEW);
            handle_inspect_command(path, view, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Write `text` where the output flags say: a file, back over the input, or stdout.
fn write_output(input: &str, text: &str, sub_matches: &ArgMatches) {
    let target = if sub_matches.get_flag("in-place") {
        Some(input)
    } else {
        sub_matches.get_one::<String>("output").map(|s| s.as_str())
    };

    match target {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{text}"),
    }
}

/// Convert a 1-based line argument to a 0-based index.
fn line_index(line: usize) -> usize {
    if line == 0 {
        eprintln!("Line numbers start at 1");
        std::process::exit(1);
    }
    line - 1
}

/// Handle the format command
fn handle_format_command(sub_matches: &ArgMatches, config: &MdtabConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let source = read_input(input);
    let rules = TableRules::from(&config.table);

    let formatted = match sub_matches.get_one::<usize>("line") {
        Some(&line) => {
            let line = line_index(line);
            let cursor = sub_matches
                .get_one::<usize>("cursor")
                .map(|&column| Cursor::new(line, column.saturating_sub(1)));
            let (text, cursor) = format_text_at_line(&source, line, cursor, &rules)
                .unwrap_or_else(|e| {
                    eprintln!("Format error: {e}");
                    std::process::exit(1);
                });
            if let Some(cursor) = cursor {
                eprintln!("cursor: {}:{}", cursor.line + 1, cursor.column + 1);
            }
            text
        }
        None => format_text(&source, &rules).unwrap_or_else(|e| {
            eprintln!("Format error: {e}");
            std::process::exit(1);
        }),
    };

    if sub_matches.get_flag("check") {
        if formatted != source {
            eprintln!("{input} would be reformatted");
            std::process::exit(1);
        }
        return;
    }

    write_output(input, &formatted, sub_matches);
}

/// Handle the csv command
fn handle_csv_command(sub_matches: &ArgMatches, config: &MdtabConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let line = *sub_matches
        .get_one::<usize>("line")
        .expect("line is required");
    let source = read_input(input);

    let csv_rules = CsvRules::from(&config.csv);
    let table_rules = TableRules::from(&config.table);
    let converted = convert_csv_text(&source, line_index(line), &csv_rules, &table_rules)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        })
        .unwrap_or_else(|| {
            eprintln!(
                "No block of at least {} '{}' delimited lines at line {line}",
                csv_rules.min_rows, csv_rules.delimiter
            );
            std::process::exit(1);
        });

    write_output(input, &converted, sub_matches);
}

/// Handle the width command
fn handle_width_command(texts: &[&String], cell: bool, heuristics: bool) {
    for text in texts {
        let width = if cell {
            measure_cell(text, heuristics)
        } else {
            display_width(text)
        };
        println!("{width}\t{text}");
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    view: &str,
    extra_params: &HashMap<String, String>,
    config: &MdtabConfig,
) {
    let source = read_input(path);

    let options = InspectOptions::from_params(
        TableRules::from(&config.table),
        DecorationRules::from(&config.decorations),
        extra_params,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let output = inspect::execute_view(&source, view, &options).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-views command
fn handle_list_views_command() {
    println!("Available views:\n");
    println!("Subjects:");
    println!("  table        - Table blocks: rows, column widths, alignments");
    println!("  decorations  - Checked tasks, headings, code blocks, rules\n");

    println!("Formats:");
    println!("  simple       - Plain text, one item per line");
    println!("  json         - JSON output\n");

    println!("Available view combinations:");
    for view in inspect::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdtabConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut MdtabConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["min-width", "min-column-width"]) {
        config.table.min_column_width = parse_usize_arg("min-width", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["fullwidth-padding", "fullwidth"]) {
        config.table.fullwidth_padding = parse_bool_arg("fullwidth-padding", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["heuristics", "token-heuristics"]) {
        config.table.token_heuristics = parse_bool_arg("heuristics", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["skip-fenced", "skip-fenced-code"]) {
        config.table.skip_fenced_code = parse_bool_arg("skip-fenced", &raw);
    }

    if let Some(raw) = extra_params.remove("delimiter") {
        config.csv.delimiter = parse_delimiter_arg(&raw);
    }
    if let Some(raw) = extra_params.remove("min-rows") {
        config.csv.min_rows = parse_usize_arg("min-rows", &raw);
    }

    if let Some(raw) = extra_params.remove("skip-editing-line") {
        config.decorations.skip_editing_line = parse_bool_arg("skip-editing-line", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}

fn parse_delimiter_arg(raw: &str) -> char {
    match raw {
        "tab" | "\\t" => '\t',
        "comma" => ',',
        "semicolon" => ';',
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    eprintln!("Invalid delimiter '{raw}' for --extra-delimiter: expected one character");
                    std::process::exit(1);
                }
            }
        }
    }
}
