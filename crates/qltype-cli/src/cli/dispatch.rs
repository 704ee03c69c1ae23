//! Extract params from ArgMatches and convert them to command args.

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::decode::{DecodeArgs, DecodeFormat};
use crate::commands::encode::{EncodeArgs, EncodeFormat};

pub struct EncodeParams {
    pub type_text: String,
    pub format: EncodeFormat,
}

impl EncodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(String::as_str) {
            Some("message") => EncodeFormat::Message,
            Some("json") => EncodeFormat::Json,
            _ => EncodeFormat::Hex,
        };
        Self {
            type_text: m.get_one::<String>("type_text").cloned().unwrap_or_default(),
            format,
        }
    }
}

impl From<EncodeParams> for EncodeArgs {
    fn from(p: EncodeParams) -> Self {
        Self {
            type_text: p.type_text,
            format: p.format,
        }
    }
}

pub struct DecodeParams {
    pub hex: String,
    pub format: DecodeFormat,
    pub color: ColorChoice,
}

impl DecodeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(String::as_str) {
            Some("tree") => DecodeFormat::Tree,
            Some("json") => DecodeFormat::Json,
            _ => DecodeFormat::Cql,
        };
        Self {
            hex: m.get_one::<String>("hex").cloned().unwrap_or_default(),
            format,
            color: parse_color(m),
        }
    }
}

impl From<DecodeParams> for DecodeArgs {
    fn from(p: DecodeParams) -> Self {
        Self {
            hex: p.hex,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub type_text: String,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_text: m.get_one::<String>("type_text").cloned().unwrap_or_default(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            type_text: p.type_text,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
