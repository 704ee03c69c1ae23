use qltype_core::{DumpStyle, dump};

use super::error::CommandError;
use super::fail;
use super::input::{load_arg, parse_hex};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeFormat {
    #[default]
    Cql,
    Tree,
    Json,
}

pub struct DecodeArgs {
    pub hex: String,
    pub format: DecodeFormat,
    pub color: bool,
}

pub fn run(args: DecodeArgs) {
    match render(&args) {
        Ok(out) => println!("{}", out),
        Err(e) => fail(e),
    }
}

pub fn render(args: &DecodeArgs) -> Result<String, CommandError> {
    let text = load_arg(&args.hex, "hex")?;
    let bytes = parse_hex(&text)?;
    let node = qltype_wire::decode(&bytes)?;
    let out = match args.format {
        DecodeFormat::Cql => node.to_string(),
        DecodeFormat::Tree => dump(&node, DumpStyle::new(args.color)).trim_end().to_string(),
        DecodeFormat::Json => serde_json::to_string_pretty(&node)?,
    };
    Ok(out)
}
