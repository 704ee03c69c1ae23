//! CQL text form of type descriptors.
//!
//! Rendering goes through `Display` on [`TypeNode`](crate::TypeNode) and
//! [`UdtRef`](crate::UdtRef); parsing through [`parse_type`] or `FromStr`.
//! The two agree: `parse_type(&t.to_string()) == Ok(t)` for every descriptor
//! no deeper than [`MAX_PARSE_DEPTH`].

mod lexer;
mod parser;
mod render;

#[cfg(test)]
mod render_tests;

pub use lexer::{Token, TokenKind, lex, token_text};
pub use parser::{MAX_PARSE_DEPTH, ParseError, parse_type};
