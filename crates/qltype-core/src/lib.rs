#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Recursive type descriptors for CQL columns and values.
//!
//! - [`DataKind`]: the closed set of kinds, with their wire discriminants
//! - [`TypeNode`]: the immutable descriptor tree and its factories
//! - [`cql`]: CQL text rendering and parsing
//! - [`dump`]: indented tree view for debugging
//!
//! Descriptors are plain values: `Send + Sync`, compared structurally, never
//! mutated after construction.

pub mod arity;
pub mod cql;
pub mod dump;
mod error;
pub mod kind;
pub mod node;

#[cfg(test)]
mod arity_tests;
#[cfg(test)]
mod kind_tests;

pub use arity::ParamArity;
pub use cql::{MAX_PARSE_DEPTH, ParseError, parse_type};
pub use dump::{DumpStyle, dump};
pub use error::TypeError;
pub use kind::DataKind;
pub use node::{TypeNode, UdtRef, structurally_equal};
