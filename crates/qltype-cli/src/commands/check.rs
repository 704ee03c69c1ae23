use qltype_core::parse_type;

use super::error::CommandError;
use super::fail;
use super::input::load_arg;

pub struct CheckArgs {
    pub type_text: String,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = verify(&args) {
        fail(e);
    }
}

/// Parse the expression and confirm the wire round trip is lossless.
pub fn verify(args: &CheckArgs) -> Result<(), CommandError> {
    let text = load_arg(&args.type_text, "type")?;
    let node = parse_type(&text)?;

    let bytes = qltype_wire::encode(&node);
    let decoded = qltype_wire::decode(&bytes)?;
    if decoded != node {
        return Err(CommandError::RoundTrip {
            what: "descriptor",
            before: node.to_string(),
            after: decoded.to_string(),
        });
    }

    let reencoded = qltype_wire::encode(&decoded);
    if reencoded != bytes {
        return Err(CommandError::RoundTrip {
            what: "bytes",
            before: hex::encode(&bytes),
            after: hex::encode(&reencoded),
        });
    }

    tracing::debug!(%node, len = bytes.len(), "type checked");
    Ok(())
}
