use qltype_core::ParseError;
use qltype_wire::WireError;

use super::input::InputError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("invalid type expression: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid QLTypePB message: {0}")]
    Wire(#[from] WireError),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("round trip changed {what}: {before} became {after}")]
    RoundTrip {
        what: &'static str,
        before: String,
        after: String,
    },
}
