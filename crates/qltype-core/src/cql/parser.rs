//! Recursive-descent parser for CQL type expressions.
//!
//! ```text
//! type   := name params?
//! name   := ident ('.' ident)?
//! params := '<' type (',' type)* '>'
//! ```
//!
//! An unqualified bare identifier that is a type keyword names that kind;
//! every other name is a user-defined type. Quoting an identifier always
//! makes it a name, so `"text"` is a user-defined type called `text`.
//!
//! Nesting is capped at [`MAX_PARSE_DEPTH`] so hostile input is rejected
//! before it can exhaust the stack.

use std::ops::Range;
use std::str::FromStr;

use super::lexer::{Token, TokenKind, lex, token_text};
use crate::error::TypeError;
use crate::kind::DataKind;
use crate::node::{TypeNode, UdtRef};

/// Deepest descriptor (as counted by [`TypeNode::depth`]) the parser builds.
pub const MAX_PARSE_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {}..{}", span.start, span.end)]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        span: Range<usize>,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// The `<` that would nest past [`MAX_PARSE_DEPTH`].
    #[error("type nesting exceeds {limit} levels at {}..{}", span.start, span.end)]
    TooDeep { limit: usize, span: Range<usize> },

    /// The expression is well-formed but describes an invalid type.
    #[error("{source} at {}..{}", span.start, span.end)]
    Type { source: TypeError, span: Range<usize> },
}

impl ParseError {
    /// Byte range of the offending input, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::TooDeep { span, .. }
            | Self::Type { span, .. } => Some(span.clone()),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}

/// Parse a CQL type expression such as `map<text, frozen<list<int>>>`.
pub fn parse_type(source: &str) -> Result<TypeNode, ParseError> {
    let tokens = lex(source)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();
    let mut parser = Parser {
        source,
        tokens,
        pos: 0,
        depth: 1,
    };
    let node = parser.parse_type()?;
    if let Some(extra) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            expected: "end of input",
            found: extra.kind.describe(),
            span: extra.span.clone(),
        });
    }
    tracing::trace!(%node, "parsed type expression");
    Ok(node)
}

impl FromStr for TypeNode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    /// Depth of the node currently being parsed; the root is 1.
    depth: usize,
}

/// One identifier after quote handling.
struct Ident {
    text: String,
    quoted: bool,
    span: Range<usize>,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        match self.bump() {
            Some(t) if t.kind == kind => Ok(t),
            Some(t) => Err(ParseError::UnexpectedToken {
                expected: kind.describe(),
                found: t.kind.describe(),
                span: t.span,
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: kind.describe(),
            }),
        }
    }

    fn ident(&mut self) -> Result<Ident, ParseError> {
        const EXPECTED: &str = "type name";
        let Some(token) = self.bump() else {
            return Err(ParseError::UnexpectedEnd { expected: EXPECTED });
        };
        let raw = token_text(self.source, &token);
        match token.kind {
            // Unquoted identifiers fold to lower case.
            TokenKind::Ident => Ok(Ident {
                text: raw.to_ascii_lowercase(),
                quoted: false,
                span: token.span,
            }),
            TokenKind::QuotedIdent => Ok(Ident {
                text: raw[1..raw.len() - 1].replace("\"\"", "\""),
                quoted: true,
                span: token.span,
            }),
            other => Err(ParseError::UnexpectedToken {
                expected: EXPECTED,
                found: other.describe(),
                span: token.span,
            }),
        }
    }

    fn parse_type(&mut self) -> Result<TypeNode, ParseError> {
        let first = self.ident()?;
        let start = first.span.start;

        let (kind, udt) = if self.at(TokenKind::Dot) {
            self.bump();
            let name = self.ident()?;
            let udt = UdtRef::new(first.text, name.text).map_err(|source| ParseError::Type {
                source,
                span: start..name.span.end,
            })?;
            (DataKind::UserDefinedType, Some(udt))
        } else {
            let keyword = (!first.quoted)
                .then(|| DataKind::from_cql_name(&first.text))
                .flatten();
            match keyword {
                Some(kind) => (kind, None),
                None => {
                    let udt = UdtRef::new("", first.text).map_err(|source| ParseError::Type {
                        source,
                        span: first.span.clone(),
                    })?;
                    (DataKind::UserDefinedType, Some(udt))
                }
            }
        };

        let params = if self.at(TokenKind::AngleOpen) {
            self.parse_params()?
        } else {
            Vec::new()
        };
        let end = self.tokens[..self.pos]
            .last()
            .map_or(start, |t| t.span.end);

        TypeNode::from_parts(kind, params, udt).map_err(|source| ParseError::Type {
            source,
            span: start..end,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<TypeNode>, ParseError> {
        let open = self.expect(TokenKind::AngleOpen)?;
        if self.depth >= MAX_PARSE_DEPTH {
            return Err(ParseError::TooDeep {
                limit: MAX_PARSE_DEPTH,
                span: open.span,
            });
        }
        self.depth += 1;
        let mut params = vec![self.parse_type()?];
        while self.at(TokenKind::Comma) {
            self.bump();
            params.push(self.parse_type()?);
        }
        self.expect(TokenKind::AngleClose)?;
        self.depth -= 1;
        Ok(params)
    }
}
