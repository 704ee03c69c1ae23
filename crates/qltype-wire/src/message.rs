//! `QLTypePB` message definitions.
//!
//! Hand-written prost types mirroring the proto2 schema:
//!
//! ```proto
//! message QLTypePB {
//!   optional DataType main = 1;
//!   repeated QLTypePB params = 2;
//!   message UDTypeInfo {
//!     optional string keyspace_name = 1;
//!     optional string name = 2;
//!   }
//!   optional UDTypeInfo udtype_info = 3;
//! }
//! ```
//!
//! Every scalar field is `optional`, so presence survives a round trip: an
//! empty `keyspace_name` and a missing one encode differently.

/// Wire value of `QLTypePB.main`.
///
/// Only the values a descriptor can carry are listed; any other number still
/// decodes into the raw `i32` and is rejected by the codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataType {
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    String = 5,
    Bool = 6,
    Float = 7,
    Double = 8,
    Binary = 9,
    Timestamp = 10,
    Decimal = 11,
    Varint = 12,
    Inet = 13,
    List = 14,
    Map = 15,
    Set = 16,
    Uuid = 17,
    Timeuuid = 18,
    UserDefinedType = 21,
    Frozen = 22,
    Date = 23,
    Time = 24,
    Jsonb = 25,
}

/// Serialized type descriptor.
#[derive(Clone, PartialEq, prost::Message)]
pub struct QlTypePb {
    /// Kind tag, a `DataType` value.
    #[prost(enumeration = "DataType", optional, tag = "1")]
    pub main: Option<i32>,

    /// Child descriptors in order (map: key, value).
    #[prost(message, repeated, tag = "2")]
    pub params: Vec<QlTypePb>,

    /// Set only for user-defined types.
    #[prost(message, optional, tag = "3")]
    pub udtype_info: Option<UdTypeInfo>,
}

/// Nominal reference carried by a user-defined type.
#[derive(Clone, PartialEq, prost::Message)]
pub struct UdTypeInfo {
    #[prost(string, optional, tag = "1")]
    pub keyspace_name: Option<String>,

    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
}

impl QlTypePb {
    /// Message with only the tag set.
    pub fn with_main(main: DataType) -> Self {
        Self {
            main: Some(main as i32),
            ..Self::default()
        }
    }
}

impl UdTypeInfo {
    pub fn new(keyspace_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            keyspace_name: Some(keyspace_name.into()),
            name: Some(name.into()),
        }
    }
}
