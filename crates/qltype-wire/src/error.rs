use qltype_core::TypeError;

/// Failure to turn protobuf bytes into a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The bytes are not a well-formed `QLTypePB`.
    #[error("protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// The message is well-formed but not a valid descriptor.
    #[error(transparent)]
    Type(#[from] TypeError),
}
