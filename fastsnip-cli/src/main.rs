// Command-line interface for fastsnip
//
// This binary turns a block of code into an entry for an editor snippet file
// (the JSON-like `*.code-snippets` / `<language>.json` definitions). It plays the
// editor's part: it reads the document, works out the selection and the
// indentation of its first and last lines, hands the text to fastsnip-core, and
// delivers the result to stdout, a file, or the clipboard.
//
// Usage:
//  fastsnip <input> [--start LINE[:COL]] [--end LINE[:COL]]          - Convert a selection (default)
//  fastsnip convert <input> [...]                                    - Same as above (explicit)
//  fastsnip template                                                 - Print the empty snippet skeleton
//
// <input> may be `-` to read from stdin. Without --start/--end the whole input
// is the selection.

mod input;
mod output;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use fastsnip_config::{FastsnipConfig, Loader};
use fastsnip_core::selection::normalize_line_endings;
use fastsnip_core::{
    format_selection, format_snippet_body_with_rules, DedentPolicy, Document, FormatError,
    FormattingRules, LineEnding, SnippetTemplate,
};
use input::LinePosition;
use output::Sink;
use std::path::Path;

const SUBCOMMANDS: &[&str] = &["convert", "template", "help"];

fn build_cli() -> Command {
    Command::new("fastsnip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn selected code into an editor snippet definition")
        .long_about(
            "fastsnip converts a block of code into an entry for an editor snippet file.\n\n\
            The selection is re-indented relative to its first line, double quotes are\n\
            escaped, and every line becomes a quoted entry of the snippet's \"body\" array.\n\
            The first and last selected lines must have the same tab indentation.\n\n\
            Examples:\n  \
            fastsnip log.js                          # Whole file as the selection\n  \
            fastsnip app.js --start 12 --end 18      # Lines 12 to 18\n  \
            fastsnip app.js --start 12:3 --end 18:4  # From line 12, column 3\n  \
            cat block.js | fastsnip -                # Read from stdin\n  \
            fastsnip app.js --start 12 --end 18 --clipboard",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a fastsnip.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("line-ending")
                .long("line-ending")
                .help("Line separator of the generated snippet")
                .value_parser(["crlf", "lf"])
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a code selection into a snippet (default command)")
                .long_about(
                    "Convert a code selection into a snippet definition.\n\n\
                    Positions are 1-based and written LINE or LINE:COL. Without --start and\n\
                    --end the whole input is used; its trailing line break is ignored.\n\
                    Indentation is measured on the full lines under the selection ends.\n\n\
                    Examples:\n  \
                    fastsnip convert app.js --start 4 --end 9\n  \
                    fastsnip convert - --first-indent 1 --last-indent 1 < block.js",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("LINE[:COL]")
                        .help("Selection start (1-based)")
                        .value_parser(input::parse_line_position),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_name("LINE[:COL]")
                        .help("Selection end (1-based, defaults to the end of the start line)")
                        .value_parser(input::parse_line_position),
                )
                .arg(
                    Arg::new("first-indent")
                        .long("first-indent")
                        .value_name("TABS")
                        .help("Tab depth of the first selected line (whole-input mode)")
                        .value_parser(clap::value_parser!(usize))
                        .conflicts_with_all(["start", "end"]),
                )
                .arg(
                    Arg::new("last-indent")
                        .long("last-indent")
                        .value_name("TABS")
                        .help("Tab depth of the last selected line (whole-input mode)")
                        .value_parser(clap::value_parser!(usize))
                        .conflicts_with_all(["start", "end"]),
                )
                .arg(
                    Arg::new("dedent")
                        .long("dedent")
                        .help("Lines indented below the first line: clamp or reject")
                        .value_parser(["clamp", "reject"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("clipboard")
                        .long("clipboard")
                        .short('c')
                        .help("Copy the snippet to the system clipboard")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("template")
                .about("Print the empty snippet skeleton")
                .long_about(
                    "Prints the snippet definition skeleton with an empty body.\n\n\
                    Examples:\n  \
                    fastsnip template\n  \
                    fastsnip template --line-ending lf",
                ),
        )
}

/// Insert the implicit `convert` subcommand when the first argument looks
/// like an input path rather than a flag or subcommand.
fn with_default_command(args: Vec<String>) -> Vec<String> {
    let needs_convert = args.get(1).is_some_and(|first| {
        (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
    });
    if !needs_convert {
        return args;
    }
    let mut injected = Vec::with_capacity(args.len() + 1);
    injected.push(args[0].clone());
    injected.push("convert".to_string());
    injected.extend_from_slice(&args[1..]);
    injected
}

fn main() {
    let args = with_default_command(std::env::args().collect());
    let matches = build_cli().get_matches_from(args);

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let command = matches.subcommand();
    apply_config_overrides(&mut config, &matches);
    if let Some(("convert", sub_matches)) = command {
        apply_config_overrides(&mut config, sub_matches);
    }

    match command {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("template", _)) => handle_template_command(&config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &FastsnipConfig) {
    let path = matches
        .get_one::<String>("input")
        .expect("input is required");

    let source = input::read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{path}': {e}");
        std::process::exit(1);
    });
    let source = if config.input.normalize_line_endings {
        normalize_line_endings(&source)
    } else {
        source
    };

    let rules = FormattingRules::from(&config.formatting);
    let start = matches.get_one::<LinePosition>("start").copied();
    let end = matches.get_one::<LinePosition>("end").copied();

    let result = if start.is_some() || end.is_some() {
        let document = Document::new(&source);
        let selection = input::resolve_selection(start, end);
        log::debug!("selection {selection:?} in '{path}'");
        format_selection(&document, &selection, &rules)
    } else {
        let (text, first, last) = input::whole_input(&source);
        let first = matches.get_one::<usize>("first-indent").copied().unwrap_or(first);
        let last = matches.get_one::<usize>("last-indent").copied().unwrap_or(last);
        if text.is_empty() {
            Err(FormatError::NoActiveSelection)
        } else {
            format_snippet_body_with_rules(text, first, last, &rules)
        }
    };

    let snippet = result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let sink = Sink::choose(
        matches.get_one::<String>("output").map(|s| s.as_str()),
        config.output.clipboard,
    );
    output::deliver(&sink, &snippet).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    if sink == Sink::Clipboard {
        eprintln!("Snippet copied to clipboard");
    }
}

/// Handle the template command
fn handle_template_command(config: &FastsnipConfig) {
    let empty: [&str; 0] = [];
    let skeleton = SnippetTemplate::assemble_with(&empty, config.formatting.line_ending);
    output::deliver(&Sink::Stdout, &skeleton).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
}

fn load_cli_config(explicit_path: Option<&str>) -> FastsnipConfig {
    Loader::standard(explicit_path.map(Path::new))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Command-line flags take precedence over configuration files.
fn apply_config_overrides(config: &mut FastsnipConfig, matches: &ArgMatches) {
    if let Some(raw) = try_get_string(matches, "line-ending") {
        config.formatting.line_ending = match raw.as_str() {
            "lf" => LineEnding::Lf,
            _ => LineEnding::Crlf,
        };
    }
    if let Some(raw) = try_get_string(matches, "dedent") {
        config.formatting.dedent = match raw.as_str() {
            "reject" => DedentPolicy::Reject,
            _ => DedentPolicy::Clamp,
        };
    }
    if matches!(matches.try_get_one::<bool>("clipboard"), Ok(Some(true))) {
        config.output.clipboard = true;
    }
}

fn try_get_string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.try_get_one::<String>(id).ok().flatten().cloned()
}
