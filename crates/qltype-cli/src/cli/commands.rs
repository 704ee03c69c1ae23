//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("qltype")
        .about("Inspect, encode and decode CQL type descriptors (QLTypePB)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(encode_command())
        .subcommand(decode_command())
        .subcommand(check_command())
}

/// Encode a CQL type expression to QLTypePB.
pub fn encode_command() -> Command {
    Command::new("encode")
        .about("Encode a CQL type expression as a QLTypePB message")
        .after_help(
            r#"EXAMPLES:
  qltype encode 'list<frozen<set<uuid>>>'        # hex bytes
  qltype encode 'map<text, ks.addr>' --format message
  echo 'frozen<foo.bar>' | qltype encode -"#,
        )
        .arg(type_text_arg())
        .arg(encode_format_arg())
}

/// Decode QLTypePB bytes back to a type.
pub fn decode_command() -> Command {
    Command::new("decode")
        .about("Decode a hex QLTypePB message")
        .after_help(
            r#"EXAMPLES:
  qltype decode 080e12020801                 # list<tinyint>
  qltype decode 080e12020801 --format tree"#,
        )
        .arg(hex_arg())
        .arg(decode_format_arg())
        .arg(color_arg())
}

/// Validate a CQL type expression.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a CQL type expression and its wire round trip")
        .arg(type_text_arg())
}
