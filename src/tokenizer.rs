//! Tokenizer for the EWKT grammar.
//!
//! Classifies the raw input into tokens on demand, with a single token of
//! lookahead. Numeric literals never include an exponent: `1.5E2` lexes as
//! three tokens (float, exponent marker, integer) and the parser owns the
//! scaling arithmetic.

use logos::{Lexer, Logos};

use crate::error::{EwktResult, SyntaxError};

/// Lexical token kinds produced by [`Tokenizer`].
///
/// All seven geometry keywords lex to the single [`TokenKind::GeometryType`]
/// kind; the concrete keyword is read from the matched text. End of input is
/// the absence of a lookahead rather than a kind of its own.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum TokenKind {
    #[token("SRID", ignore(ascii_case))]
    Srid,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// One of the seven geometry type keywords. Keywords are matched longest
    /// first, so `MULTIPOINT` never stops at `M` or `POINT` at `POINTZ`'s
    /// trailing marker.
    #[regex(
        "GEOMETRYCOLLECTION|MULTILINESTRING|MULTIPOLYGON|MULTIPOINT|LINESTRING|POLYGON|POINT",
        ignore(ascii_case)
    )]
    GeometryType,

    /// `ZM` dimensionality marker.
    #[token("ZM", ignore(ascii_case))]
    DimensionZm,

    /// `Z` dimensionality marker.
    #[token("Z", ignore(ascii_case))]
    DimensionZ,

    /// `M` dimensionality marker.
    #[token("M", ignore(ascii_case))]
    DimensionM,

    /// Exponent marker in scientific notation.
    #[token("E", ignore(ascii_case))]
    Exponent,

    #[regex(r"[+-]?[0-9]+")]
    Integer,

    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)")]
    Float,
}

impl TokenKind {
    /// Human-readable name for this kind, used only in error messages.
    pub(crate) fn describe(self) -> &'static str {
        match self {
            TokenKind::Srid => "`SRID`",
            TokenKind::Equals => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::GeometryType => "a geometry type keyword",
            TokenKind::DimensionZm | TokenKind::DimensionZ | TokenKind::DimensionM => {
                "a dimensionality marker"
            }
            TokenKind::Exponent => "`E`",
            TokenKind::Integer => "an integer literal",
            TokenKind::Float => "a floating point literal",
        }
    }
}

/// A classified token: its kind, the matched source text, and its byte offset
/// in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

/// Streaming tokenizer with a single token of lookahead.
///
/// Each parse call owns one of these; no tokenizer state is shared between
/// parses.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    lexer: Lexer<'a, TokenKind>,
    lookahead: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing `input`, priming the first lookahead token.
    pub fn new(input: &'a str) -> EwktResult<Self> {
        let mut tokenizer = Self {
            input,
            lexer: TokenKind::lexer(input),
            lookahead: None,
        };
        tokenizer.refill()?;
        Ok(tokenizer)
    }

    /// The current lookahead token, or `None` at end of input.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.lookahead
    }

    /// Whether the lookahead token has the given kind.
    pub fn is_next(&self, kind: TokenKind) -> bool {
        self.lookahead.is_some_and(|token| token.kind == kind)
    }

    /// Whether the lookahead token has any of the given kinds.
    pub fn is_next_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead
            .is_some_and(|token| kinds.contains(&token.kind))
    }

    /// Consume the lookahead token, advancing to the next one. Returns the
    /// consumed token, or `None` when already at end of input.
    pub fn advance(&mut self) -> EwktResult<Option<Token<'a>>> {
        let consumed = self.lookahead.take();
        self.refill()?;
        Ok(consumed)
    }

    fn refill(&mut self) -> EwktResult<()> {
        self.lookahead = match self.lexer.next() {
            Some(Ok(kind)) => Some(Token {
                kind,
                text: self.lexer.slice(),
                position: self.lexer.span().start,
            }),
            Some(Err(())) => {
                return Err(SyntaxError {
                    expected: "a valid token".to_string(),
                    found: format!("`{}`", self.lexer.slice()),
                    position: Some(self.lexer.span().start),
                    input: self.input.to_string(),
                });
            }
            None => None,
        };
        Ok(())
    }
}
