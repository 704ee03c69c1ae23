use qltype_core::parse_type;

use super::error::CommandError;
use super::fail;
use super::input::load_arg;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodeFormat {
    #[default]
    Hex,
    /// Debug form of the protobuf message.
    Message,
    Json,
}

pub struct EncodeArgs {
    pub type_text: String,
    pub format: EncodeFormat,
}

pub fn run(args: EncodeArgs) {
    match render(&args) {
        Ok(out) => println!("{}", out),
        Err(e) => fail(e),
    }
}

pub fn render(args: &EncodeArgs) -> Result<String, CommandError> {
    let text = load_arg(&args.type_text, "type")?;
    let node = parse_type(&text)?;
    let out = match args.format {
        EncodeFormat::Hex => hex::encode(qltype_wire::encode(&node)),
        EncodeFormat::Message => format!("{:#?}", qltype_wire::to_wire(&node)),
        EncodeFormat::Json => serde_json::to_string_pretty(&node)?,
    };
    Ok(out)
}
