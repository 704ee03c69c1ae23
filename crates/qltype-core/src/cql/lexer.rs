//! Lexer for CQL type expressions.
//!
//! Tokens are span-based; text is sliced from the source only when needed.
//! Consecutive characters the lexer cannot match are coalesced into a single
//! `Garbage` token.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token(",")]
    Comma,

    /// Keyspace separator: `ks.name`
    #[token(".")]
    Dot,

    /// Bare identifier or type keyword. Case-insensitive.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Double-quoted identifier, `""` escapes a quote. Case-preserving.
    #[regex(r#""(?:[^"]|"")*""#)]
    QuotedIdent,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Unmatched input (coalesced lexer errors).
    Garbage,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        self == Self::Whitespace
    }

    /// Short description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::AngleOpen => "'<'",
            Self::AngleClose => "'>'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Ident => "identifier",
            Self::QuotedIdent => "quoted identifier",
            Self::Whitespace => "whitespace",
            Self::Garbage => "unrecognized input",
        }
    }
}

/// Token: kind + byte span into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

/// Tokenize `source`, trivia included.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..lexer.span().start));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

/// Text of a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
