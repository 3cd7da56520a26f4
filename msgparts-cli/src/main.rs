// Command-line interface for msgparts
//
// This binary exposes the msgparts library for inspecting how received message bodies turn into
// editable parts, and how parts turn back into bodies.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Besides the registered formats, "parts" is
// accepted on both sides and means the JSON rendition of a part sequence.
// Usage:
//  msgparts <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  msgparts convert <input> --to <format> ...                          - Same as above (explicit)
//  msgparts event <event.json> [--to <format>] [--quoted]              - Deserialize a whole message event
//  msgparts list-formats                                               - List available formats
//
// Configuration is read from ./msgparts.toml when present, then from --config.

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use msgparts::event::{parse_event, MessageContent};
use msgparts::parts::{merge_text_runs, Part};
use msgparts::{DeserializeRules, FormatRegistry, ParseOptions};
use msgparts_config::{Loader, MsgpartsConfig};
use std::fs;
use std::io::Read;

/// Pseudo-format naming the JSON rendition of a part sequence.
const PARTS_FORMAT: &str = "parts";

const SUBCOMMANDS: &[&str] = &["convert", "event", "list-formats", "help"];

fn build_cli() -> Command {
    Command::new("msgparts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and convert chat message bodies")
        .long_about(
            "msgparts turns received chat message bodies into editable parts and back.\n\n\
            Commands:\n  \
            - convert: Convert a body between formats (html, markdown, plain, parts)\n  \
            - event: Deserialize a message event the way an editor would\n  \
            - list-formats: Show the available formats\n\n\
            Examples:\n  \
            msgparts message.html --to parts        # Show the parts of an HTML body\n  \
            msgparts message.html --to markdown     # Turn an HTML body into Markdown\n  \
            msgparts event event.json --quoted      # Parts of an event, as a quote",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
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
                .about("Convert between body formats (default command)")
                .long_about(
                    "Convert a message body between formats.\n\n\
                    Supported formats:\n  \
                    - html:     Formatted body (.html)\n  \
                    - markdown: Markdown body (.md)\n  \
                    - plain:    Plain body (.txt)\n  \
                    - parts:    JSON list of parts\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Use '-' as input to read from stdin (requires --from).\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .args(parse_option_args()),
        )
        .subcommand(
            Command::new("event")
                .about("Deserialize a message event")
                .long_about(
                    "Deserialize a message event into parts.\n\n\
                    The input is a JSON object holding the message content\n\
                    (body, formatted_body, format, msgtype), or a whole event with\n\
                    a 'content' key. Emote and rainbow messages get their slash\n\
                    command prepended, as the composer would show them.",
                )
                .arg(
                    Arg::new("input")
                        .help("Event JSON file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format (defaults to parts)")
                        .default_value(PARTS_FORMAT)
                        .value_hint(ValueHint::Other),
                )
                .args(parse_option_args()),
        )
        .subcommand(Command::new("list-formats").about("List available formats"))
}

fn parse_option_args() -> [Arg; 3] {
    [
        Arg::new("quoted")
            .long("quoted")
            .help("Deserialize as a quoted excerpt (every line becomes a quote)")
            .action(ArgAction::SetTrue),
        Arg::new("escape")
            .long("escape")
            .help("Escape Markdown syntax in text runs")
            .action(ArgAction::SetTrue),
        Arg::new("merge")
            .long("merge")
            .help("Merge adjacent text runs in parts output")
            .action(ArgAction::SetTrue),
    ]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file argument means the default convert command
            if args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set; --verbose only replaces the quiet default
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    let rules = DeserializeRules::from(&config);
    let registry = FormatRegistry::with_rules(&rules);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let to = required(sub_matches, "to")?;
            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.clone(),
                None => detect_format(&registry, input)?,
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, sub_matches)
        }
        Some(("event", sub_matches)) => {
            let input = required(sub_matches, "input")?;
            let to = required(sub_matches, "to")?;
            handle_event_command(&registry, &rules, input, to, sub_matches)
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&registry);
            Ok(())
        }
        _ => bail!("Unknown subcommand. Use --help for usage information."),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .with_context(|| format!("missing required argument '{name}'"))
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MsgpartsConfig> {
    tracing::debug!(?explicit_path, "loading configuration");
    let loader = Loader::new().with_optional_file("msgparts.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().context("Failed to load configuration")
}

fn parse_options(matches: &ArgMatches) -> ParseOptions {
    ParseOptions {
        is_quoted_message: matches.get_flag("quoted"),
        should_escape: matches.get_flag("escape"),
    }
}

fn detect_format(registry: &FormatRegistry, input: &str) -> Result<String> {
    if input.ends_with(".json") {
        return Ok(PARTS_FORMAT.to_string());
    }
    registry.detect_format_from_filename(input).with_context(|| {
        format!("Could not detect format from filename '{input}'. Please specify --from explicitly")
    })
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Error reading stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(input).with_context(|| format!("Error reading file '{input}'"))
    }
}

fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text).with_context(|| format!("Error writing file '{path}'")),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    matches: &ArgMatches,
) -> Result<()> {
    // Validate formats exist before touching the input
    if from != PARTS_FORMAT {
        registry.get(from)?;
    }
    if to != PARTS_FORMAT {
        registry.get(to)?;
    }

    tracing::debug!(input, from, to, "converting");
    let source = read_input(input)?;
    let parts = if from == PARTS_FORMAT {
        serde_json::from_str::<Vec<Part>>(&source).context("Invalid parts JSON")?
    } else {
        registry.parse(&source, from, parse_options(matches))?
    };

    let text = render(registry, parts, to, matches.get_flag("merge"))?;
    write_output(output, &text)
}

/// Handle the event command
fn handle_event_command(
    registry: &FormatRegistry,
    rules: &DeserializeRules,
    input: &str,
    to: &str,
    matches: &ArgMatches,
) -> Result<()> {
    if to != PARTS_FORMAT {
        registry.get(to)?;
    }

    let source = read_input(input)?;
    let mut value: serde_json::Value = serde_json::from_str(&source).context("Invalid event JSON")?;
    // accept a whole event as well as its content
    if let Some(content) = value.get_mut("content").map(serde_json::Value::take) {
        value = content;
    }
    let content: MessageContent =
        serde_json::from_value(value).context("Event content is not a message")?;

    let parts = parse_event(&content, rules, parse_options(matches));
    let text = render(registry, parts, to, matches.get_flag("merge"))?;
    write_output(None, &text)
}

fn render(registry: &FormatRegistry, parts: Vec<Part>, to: &str, merge: bool) -> Result<String> {
    if to == PARTS_FORMAT {
        let parts = if merge { merge_text_runs(parts) } else { parts };
        let mut json = serde_json::to_string_pretty(&parts)?;
        json.push('\n');
        return Ok(json);
    }
    Ok(registry.serialize(&parts, to)?)
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format.file_extensions().join(", ");
            println!("  {name:<10} {}  [{extensions}]", format.description());
        }
    }
    println!("  {PARTS_FORMAT:<10} JSON list of parts  [json]");
}
