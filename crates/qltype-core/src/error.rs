use crate::kind::DataKind;

/// Reasons a type descriptor cannot be built or decoded.
///
/// Every factory and the wire decoder report through this type. Errors are
/// deterministic: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The tag is unset or names no known kind.
    #[error("unknown type tag: {}", display_tag(.0))]
    UnknownTypeTag(Option<i32>),

    #[error("{kind} takes {expected} param(s), got {actual}")]
    ArityMismatch {
        kind: DataKind,
        expected: usize,
        actual: usize,
    },

    /// A user-defined type without its keyspace/name reference.
    #[error("USER_DEFINED_TYPE is missing {0}")]
    MissingNominalInfo(&'static str),

    #[error("{0} must not carry a user-defined type reference")]
    UnexpectedNominalInfo(DataKind),

    #[error("user-defined type name must not be empty")]
    InvalidNominalName,

    #[error("{0} is not a primitive kind")]
    NotPrimitive(DataKind),
}

fn display_tag(tag: &Option<i32>) -> String {
    match tag {
        Some(v) => v.to_string(),
        None => "<unset>".to_string(),
    }
}
