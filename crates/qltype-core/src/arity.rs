//! Parameter arity definitions.
//!
//! Every data kind carries a fixed number of child descriptors.

/// How many child descriptors a kind takes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ParamArity {
    /// Leaf kinds: primitives and user-defined types.
    Nullary,
    /// Element or wrapped type (List, Set, Frozen).
    Unary,
    /// Key and value types, in that order (Map).
    Binary,
}

impl ParamArity {
    /// Exact number of params.
    pub fn count(self) -> usize {
        match self {
            Self::Nullary => 0,
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }

    /// Check whether `n` params satisfy this arity.
    pub fn accepts(self, n: usize) -> bool {
        self.count() == n
    }

    pub fn is_leaf(self) -> bool {
        self == Self::Nullary
    }
}

impl std::fmt::Display for ParamArity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}
