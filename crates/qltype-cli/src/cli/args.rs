//! Shared argument builders for CLI commands.

use clap::{Arg, ArgAction};

/// CQL type expression (positional). `-` reads stdin.
pub fn type_text_arg() -> Arg {
    Arg::new("type_text")
        .value_name("TYPE")
        .required(true)
        .help("CQL type expression, e.g. 'map<text, frozen<list<int>>>' ('-' for stdin)")
}

/// Hex-encoded QLTypePB bytes (positional). `-` reads stdin.
pub fn hex_arg() -> Arg {
    Arg::new("hex")
        .value_name("HEX")
        .required(true)
        .help("Hex-encoded QLTypePB message ('-' for stdin)")
}

/// Output format for `encode` (--format).
pub fn encode_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("hex")
        .value_parser(["hex", "message", "json"])
        .help("Output format")
}

/// Output format for `decode` (--format).
pub fn decode_format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("cql")
        .value_parser(["cql", "tree", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log more (-v debug, -vv trace); RUST_LOG overrides")
}
