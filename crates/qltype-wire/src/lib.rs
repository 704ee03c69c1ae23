#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Wire codec for qltype descriptors.
//!
//! A descriptor travels as a `QLTypePB` protobuf message: the kind tag, the
//! ordered child messages, and for user-defined types the keyspace/name pair.
//! [`to_wire`] and [`from_wire`] convert between the two forms;
//! [`encode`]/[`decode`] add the protobuf byte layer.
//!
//! For every valid descriptor `t`, `from_wire(&to_wire(&t)) == Ok(t)`, and
//! `decode(&encode(&t))` holds at any nesting depth. Bytes in canonical field
//! order (the order [`encode`] writes) re-encode to the same bytes; other field
//! orders decode to the same descriptor and re-encode canonically.

pub mod codec;
mod error;
pub mod message;


pub use codec::{decode, encode, from_wire, to_wire};
pub use error::WireError;
pub use message::{DataType, QlTypePb, UdTypeInfo};
