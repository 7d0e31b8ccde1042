use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/inspect.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &[
    "table-simple",
    "table-json",
    "decorations-simple",
    "decorations-json",
];

fn file_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Path to the Markdown file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdtab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Align Markdown pipe tables")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("format")
                .arg(file_arg("input"))
                .arg(Arg::new("line").long("line"))
                .arg(Arg::new("cursor").long("cursor"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("check").long("check").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("csv")
                .arg(file_arg("input"))
                .arg(Arg::new("line").long("line").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("width")
                .arg(Arg::new("text").required(true).num_args(1..))
                .arg(Arg::new("cell").long("cell").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("inspect").arg(file_arg("path")).arg(
                Arg::new("view")
                    .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                    .index(2)
                    .value_hint(ValueHint::Other),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdtab", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdtab", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdtab", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
