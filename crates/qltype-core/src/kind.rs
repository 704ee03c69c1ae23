//! Canonical data kind definitions.
//!
//! The discriminants are the engine's `DataType` wire values, so a kind can be
//! written into a `QLTypePB.main` field as-is.

use crate::arity::ParamArity;

/// Data kinds a type descriptor can carry.
///
/// Primitive kinds are leaves. `List`, `Set`, `Map` and `Frozen` take child
/// descriptors; `UserDefinedType` is a nominal leaf.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum DataKind {
    Int8 = 1,
    Int16 = 2,
    Int32 = 3,
    Int64 = 4,
    /// UTF-8 text.
    String = 5,
    Bool = 6,
    Float = 7,
    Double = 8,
    /// Opaque bytes (`blob`).
    Binary = 9,
    Timestamp = 10,
    /// Arbitrary-precision decimal.
    Decimal = 11,
    /// Arbitrary-precision integer.
    Varint = 12,
    Inet = 13,
    /// `list<T>`.
    List = 14,
    /// `map<K, V>`.
    Map = 15,
    /// `set<T>`.
    Set = 16,
    Uuid = 17,
    /// Time-ordered UUID.
    Timeuuid = 18,
    /// Nominal reference to a type declared in a keyspace.
    UserDefinedType = 21,
    /// `frozen<T>` - immutable, hashable wrapper.
    Frozen = 22,
    Date = 23,
    Time = 24,
    Jsonb = 25,
}

impl DataKind {
    /// Every primitive kind, in discriminant order.
    pub const PRIMITIVES: [Self; 18] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Float,
        Self::Double,
        Self::Binary,
        Self::Timestamp,
        Self::Decimal,
        Self::Varint,
        Self::Inet,
        Self::Uuid,
        Self::Timeuuid,
        Self::Date,
        Self::Time,
        Self::Jsonb,
    ];

    /// Convert from a raw wire discriminant.
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::Int8),
            2 => Some(Self::Int16),
            3 => Some(Self::Int32),
            4 => Some(Self::Int64),
            5 => Some(Self::String),
            6 => Some(Self::Bool),
            7 => Some(Self::Float),
            8 => Some(Self::Double),
            9 => Some(Self::Binary),
            10 => Some(Self::Timestamp),
            11 => Some(Self::Decimal),
            12 => Some(Self::Varint),
            13 => Some(Self::Inet),
            14 => Some(Self::List),
            15 => Some(Self::Map),
            16 => Some(Self::Set),
            17 => Some(Self::Uuid),
            18 => Some(Self::Timeuuid),
            21 => Some(Self::UserDefinedType),
            22 => Some(Self::Frozen),
            23 => Some(Self::Date),
            24 => Some(Self::Time),
            25 => Some(Self::Jsonb),
            _ => None,
        }
    }

    /// Raw wire discriminant.
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Number of child descriptors this kind carries.
    pub fn arity(self) -> ParamArity {
        match self {
            Self::List | Self::Set | Self::Frozen => ParamArity::Unary,
            Self::Map => ParamArity::Binary,
            _ => ParamArity::Nullary,
        }
    }

    /// Whether this is a leaf scalar kind.
    pub fn is_primitive(self) -> bool {
        !self.is_parametric() && !self.is_user_defined()
    }

    /// Whether this kind takes child descriptors (List, Set, Map, Frozen).
    pub fn is_parametric(self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map | Self::Frozen)
    }

    /// Whether this is a collection kind (List, Set, Map).
    pub fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }

    pub fn is_frozen(self) -> bool {
        matches!(self, Self::Frozen)
    }

    pub fn is_user_defined(self) -> bool {
        matches!(self, Self::UserDefinedType)
    }

    /// Name of the `DataType` enum value on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Int8 => "INT8",
            Self::Int16 => "INT16",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::String => "STRING",
            Self::Bool => "BOOL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Binary => "BINARY",
            Self::Timestamp => "TIMESTAMP",
            Self::Decimal => "DECIMAL",
            Self::Varint => "VARINT",
            Self::Inet => "INET",
            Self::List => "LIST",
            Self::Map => "MAP",
            Self::Set => "SET",
            Self::Uuid => "UUID",
            Self::Timeuuid => "TIMEUUID",
            Self::UserDefinedType => "USER_DEFINED_TYPE",
            Self::Frozen => "FROZEN",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Jsonb => "JSONB",
        }
    }

    /// CQL keyword for this kind. `None` for user-defined types, which are
    /// spelled by their own name.
    pub fn cql_name(self) -> Option<&'static str> {
        let name = match self {
            Self::Int8 => "tinyint",
            Self::Int16 => "smallint",
            Self::Int32 => "int",
            Self::Int64 => "bigint",
            Self::String => "text",
            Self::Bool => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::Binary => "blob",
            Self::Timestamp => "timestamp",
            Self::Decimal => "decimal",
            Self::Varint => "varint",
            Self::Inet => "inet",
            Self::List => "list",
            Self::Map => "map",
            Self::Set => "set",
            Self::Uuid => "uuid",
            Self::Timeuuid => "timeuuid",
            Self::Frozen => "frozen",
            Self::Date => "date",
            Self::Time => "time",
            Self::Jsonb => "jsonb",
            Self::UserDefinedType => return None,
        };
        Some(name)
    }

    /// Resolve a CQL type keyword, including the common aliases.
    ///
    /// Matching is ASCII case-insensitive.
    pub fn from_cql_name(name: &str) -> Option<Self> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "tinyint" => Self::Int8,
            "smallint" => Self::Int16,
            "int" | "integer" => Self::Int32,
            "bigint" => Self::Int64,
            "text" | "varchar" => Self::String,
            "boolean" | "bool" => Self::Bool,
            "float" => Self::Float,
            "double" => Self::Double,
            "blob" | "binary" => Self::Binary,
            "timestamp" => Self::Timestamp,
            "decimal" => Self::Decimal,
            "varint" => Self::Varint,
            "inet" => Self::Inet,
            "list" => Self::List,
            "map" => Self::Map,
            "set" => Self::Set,
            "uuid" => Self::Uuid,
            "timeuuid" => Self::Timeuuid,
            "frozen" => Self::Frozen,
            "date" => Self::Date,
            "time" => Self::Time,
            "jsonb" => Self::Jsonb,
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for DataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
