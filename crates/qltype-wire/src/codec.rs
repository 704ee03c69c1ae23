//! Conversion between [`TypeNode`] and [`QlTypePb`].
//!
//! `to_wire` cannot fail. `from_wire` validates every message level before it
//! builds anything, and the first failure aborts the whole decode: no partial
//! tree is ever returned.

use prost::Message;
use qltype_core::{DataKind, TypeError, TypeNode, UdtRef};

use crate::error::WireError;
use crate::message::{QlTypePb, UdTypeInfo};

/// Encode a descriptor as a wire message.
///
/// Params keep their order; a user-defined type sets both `keyspace_name`
/// and `name`, even when the keyspace is empty.
pub fn to_wire(node: &TypeNode) -> QlTypePb {
    QlTypePb {
        main: Some(node.kind().as_i32()),
        params: node.params().iter().map(to_wire).collect(),
        udtype_info: node
            .udt()
            .map(|udt| UdTypeInfo::new(udt.namespace(), udt.name())),
    }
}

/// Decode a wire message into a descriptor.
pub fn from_wire(msg: &QlTypePb) -> Result<TypeNode, TypeError> {
    let Some(kind) = msg.main.and_then(DataKind::from_i32) else {
        tracing::debug!(main = ?msg.main, "rejected unknown type tag");
        return Err(TypeError::UnknownTypeTag(msg.main));
    };

    let arity = kind.arity();
    if !arity.accepts(msg.params.len()) {
        tracing::debug!(%kind, params = msg.params.len(), "rejected param count");
        return Err(TypeError::ArityMismatch {
            kind,
            expected: arity.count(),
            actual: msg.params.len(),
        });
    }
    if !kind.is_user_defined() && msg.udtype_info.is_some() {
        tracing::debug!(%kind, "rejected stray udtype_info");
        return Err(TypeError::UnexpectedNominalInfo(kind));
    }

    let params = msg
        .params
        .iter()
        .map(from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    let udt = msg.udtype_info.as_ref().map(udt_from_wire).transpose()?;

    TypeNode::from_parts(kind, params, udt)
}

fn udt_from_wire(info: &UdTypeInfo) -> Result<UdtRef, TypeError> {
    let keyspace = info
        .keyspace_name
        .as_deref()
        .ok_or(TypeError::MissingNominalInfo("udtype_info.keyspace_name"))?;
    let name = info
        .name
        .as_deref()
        .ok_or(TypeError::MissingNominalInfo("udtype_info.name"))?;
    UdtRef::new(keyspace, name)
}

/// Encode a descriptor straight to protobuf bytes.
pub fn encode(node: &TypeNode) -> Vec<u8> {
    let bytes = to_wire(node).encode_to_vec();
    tracing::trace!(%node, len = bytes.len(), "encoded type descriptor");
    bytes
}

/// Decode protobuf bytes into a descriptor.
pub fn decode(bytes: &[u8]) -> Result<TypeNode, WireError> {
    let msg = QlTypePb::decode(bytes).inspect_err(|e| {
        tracing::debug!(len = bytes.len(), error = %e, "malformed QLTypePB bytes");
    })?;
    let node = from_wire(&msg)?;
    tracing::trace!(%node, "decoded type descriptor");
    Ok(node)
}

impl From<&TypeNode> for QlTypePb {
    fn from(node: &TypeNode) -> Self {
        to_wire(node)
    }
}

impl TryFrom<&QlTypePb> for TypeNode {
    type Error = TypeError;

    fn try_from(msg: &QlTypePb) -> Result<Self, Self::Error> {
        from_wire(msg)
    }
}
