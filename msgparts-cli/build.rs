use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by msgparts::FormatRegistry::with_defaults
// plus the "parts" pseudo-format. Build scripts can't access src/ modules.
const AVAILABLE_FORMATS: &[&str] = &["html", "markdown", "plain", "parts"];

fn format_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
        .value_hint(ValueHint::Other)
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("msgparts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and convert chat message bodies")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a msgparts.toml configuration file")
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
        .subcommand(
            Command::new("convert")
                .about("Convert between body formats")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg("from", "Source format"))
                .arg(format_arg("to", "Target format").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(flag("quoted", "Deserialize as a quoted excerpt"))
                .arg(flag("escape", "Escape Markdown syntax in text runs"))
                .arg(flag("merge", "Merge adjacent text runs in parts output")),
        )
        .subcommand(
            Command::new("event")
                .about("Deserialize a message event")
                .arg(
                    Arg::new("input")
                        .help("Event JSON file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg("to", "Output format"))
                .arg(flag("quoted", "Deserialize as a quoted excerpt"))
                .arg(flag("escape", "Escape Markdown syntax in text runs"))
                .arg(flag("merge", "Merge adjacent text runs in parts output")),
        )
        .subcommand(Command::new("list-formats").about("List available formats"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "msgparts", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "msgparts", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "msgparts", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
