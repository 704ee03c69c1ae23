//! The recursive type descriptor.
//!
//! A [`TypeNode`] is immutable once built. Factories enforce the per-kind
//! arity, so a node obtained from this module (or from the wire decoder, which
//! goes through [`TypeNode::from_parts`]) always satisfies:
//!
//! - primitives: no params, no UDT reference
//! - `List`, `Set`, `Frozen`: one param
//! - `Map`: two params, key then value
//! - `UserDefinedType`: no params, a UDT reference with a non-empty name

use crate::error::TypeError;
use crate::kind::DataKind;

/// Nominal reference to a user-defined type.
///
/// The namespace (keyspace) may be empty; the name may not.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub struct UdtRef {
    namespace: String,
    name: String,
}

impl UdtRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidNominalName);
        }
        Ok(Self {
            namespace: namespace.into(),
            name,
        })
    }

    /// Keyspace the type lives in. Empty when unqualified.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }
}

/// Type descriptor: a kind, its ordered child descriptors, and for
/// user-defined types the nominal reference.
#[derive(Clone, Eq, Debug, serde::Serialize)]
pub struct TypeNode {
    kind: DataKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    params: Vec<TypeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    udt: Option<UdtRef>,
}

impl TypeNode {
    pub const INT8: Self = Self::leaf(DataKind::Int8);
    pub const INT16: Self = Self::leaf(DataKind::Int16);
    pub const INT32: Self = Self::leaf(DataKind::Int32);
    pub const INT64: Self = Self::leaf(DataKind::Int64);
    pub const STRING: Self = Self::leaf(DataKind::String);
    pub const BOOL: Self = Self::leaf(DataKind::Bool);
    pub const FLOAT: Self = Self::leaf(DataKind::Float);
    pub const DOUBLE: Self = Self::leaf(DataKind::Double);
    pub const BINARY: Self = Self::leaf(DataKind::Binary);
    pub const TIMESTAMP: Self = Self::leaf(DataKind::Timestamp);
    pub const DECIMAL: Self = Self::leaf(DataKind::Decimal);
    pub const VARINT: Self = Self::leaf(DataKind::Varint);
    pub const INET: Self = Self::leaf(DataKind::Inet);
    pub const UUID: Self = Self::leaf(DataKind::Uuid);
    pub const TIMEUUID: Self = Self::leaf(DataKind::Timeuuid);
    pub const DATE: Self = Self::leaf(DataKind::Date);
    pub const TIME: Self = Self::leaf(DataKind::Time);
    pub const JSONB: Self = Self::leaf(DataKind::Jsonb);

    const fn leaf(kind: DataKind) -> Self {
        Self {
            kind,
            params: Vec::new(),
            udt: None,
        }
    }

    /// Create a primitive descriptor.
    pub fn primitive(kind: DataKind) -> Result<Self, TypeError> {
        if !kind.is_primitive() {
            return Err(TypeError::NotPrimitive(kind));
        }
        Ok(Self::leaf(kind))
    }

    /// Create `list<element>`.
    pub fn list(element: TypeNode) -> Self {
        Self::unary(DataKind::List, element)
    }

    /// Create `set<element>`.
    pub fn set(element: TypeNode) -> Self {
        Self::unary(DataKind::Set, element)
    }

    /// Create `frozen<inner>`. Any descriptor may be frozen, including one
    /// that is already frozen.
    pub fn frozen(inner: TypeNode) -> Self {
        Self::unary(DataKind::Frozen, inner)
    }

    /// Create `map<key, value>`. The order of the arguments is kept.
    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        Self {
            kind: DataKind::Map,
            params: vec![key, value],
            udt: None,
        }
    }

    /// Create a reference to the user-defined type `namespace.name`.
    ///
    /// An empty namespace is kept as-is; an empty name is rejected.
    pub fn user_defined(
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let udt = UdtRef::new(namespace, name)?;
        Ok(Self {
            kind: DataKind::UserDefinedType,
            params: Vec::new(),
            udt: Some(udt),
        })
    }

    fn unary(kind: DataKind, param: TypeNode) -> Self {
        Self {
            kind,
            params: vec![param],
            udt: None,
        }
    }

    /// Build a descriptor from loose parts, checking every invariant.
    ///
    /// Arity is checked before the UDT reference.
    pub fn from_parts(
        kind: DataKind,
        params: Vec<TypeNode>,
        udt: Option<UdtRef>,
    ) -> Result<Self, TypeError> {
        let arity = kind.arity();
        let error = if !arity.accepts(params.len()) {
            TypeError::ArityMismatch {
                kind,
                expected: arity.count(),
                actual: params.len(),
            }
        } else {
            match (kind.is_user_defined(), udt.is_some()) {
                (true, false) => TypeError::MissingNominalInfo("udtype_info"),
                (false, true) => TypeError::UnexpectedNominalInfo(kind),
                _ => return Ok(Self { kind, params, udt }),
            }
        };
        tracing::debug!(%kind, params = params.len(), %error, "rejected type descriptor");
        Err(error)
    }

    #[inline]
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Child descriptors in declaration order.
    #[inline]
    pub fn params(&self) -> &[TypeNode] {
        &self.params
    }

    /// The nominal reference; `Some` exactly for user-defined types.
    #[inline]
    pub fn udt(&self) -> Option<&UdtRef> {
        self.udt.as_ref()
    }

    /// Element type of a list or set.
    pub fn element(&self) -> Option<&TypeNode> {
        match self.kind {
            DataKind::List | DataKind::Set => self.params.first(),
            _ => None,
        }
    }

    /// Key type of a map.
    pub fn key(&self) -> Option<&TypeNode> {
        match self.kind {
            DataKind::Map => self.params.first(),
            _ => None,
        }
    }

    /// Value type of a map.
    pub fn value(&self) -> Option<&TypeNode> {
        match self.kind {
            DataKind::Map => self.params.get(1),
            _ => None,
        }
    }

    /// Wrapped type of a frozen descriptor.
    pub fn inner(&self) -> Option<&TypeNode> {
        match self.kind {
            DataKind::Frozen => self.params.first(),
            _ => None,
        }
    }

    /// Strip every outer `frozen<...>` layer.
    pub fn unfrozen(&self) -> &TypeNode {
        let mut node = self;
        while let Some(inner) = node.inner() {
            node = inner;
        }
        node
    }

    pub fn is_primitive(&self) -> bool {
        self.kind.is_primitive()
    }

    pub fn is_collection(&self) -> bool {
        self.kind.is_collection()
    }

    pub fn is_frozen(&self) -> bool {
        self.kind.is_frozen()
    }

    pub fn is_user_defined(&self) -> bool {
        self.kind.is_user_defined()
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.params.iter().map(TypeNode::depth).max().unwrap_or(0)
    }

    /// User-defined types referenced anywhere in this descriptor, in pre-order.
    pub fn referenced_udts(&self) -> Vec<&UdtRef> {
        let mut out = Vec::new();
        self.collect_udts(&mut out);
        out
    }

    fn collect_udts<'a>(&'a self, out: &mut Vec<&'a UdtRef>) {
        if let Some(udt) = &self.udt {
            out.push(udt);
        }
        for param in &self.params {
            param.collect_udts(out);
        }
    }
}

/// Recursive, order-sensitive comparison of two descriptors.
///
/// Equal iff the kinds match, the params are pairwise equal in order, and the
/// UDT references match exactly (an empty namespace only equals an empty one).
pub fn structurally_equal(a: &TypeNode, b: &TypeNode) -> bool {
    a.kind == b.kind
        && a.udt == b.udt
        && a.params.len() == b.params.len()
        && a
            .params
            .iter()
            .zip(&b.params)
            .all(|(x, y)| structurally_equal(x, y))
}

impl PartialEq for TypeNode {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl std::hash::Hash for TypeNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.params.hash(state);
        self.udt.hash(state);
    }
}
