//! Token types produced by the EDN lexer.

use std::fmt;

use num_bigint::BigInt;

/// An exact fraction, as written in the source.
///
/// The denominator is strictly positive and the sign lives entirely on the
/// numerator. The fraction is never reduced: `4/8` stays `4/8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    /// Signed numerator.
    pub numerator: BigInt,
    /// Strictly positive denominator.
    pub denominator: BigInt,
}

impl Rational {
    /// Creates a rational from its two components.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The kind of a token, carrying the decoded payload where applicable.
///
/// The numeric kinds stay distinct through the token stream even though
/// they all fold into one integer representation in the value tree: the
/// distinction is what the grammar was written against.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    OpenList,
    /// `)`
    CloseList,
    /// `[`
    OpenVector,
    /// `]`
    CloseVector,
    /// `{`
    OpenMap,
    /// `}` — closes maps and sets alike.
    CloseMap,
    /// A plain decimal integer, e.g. `42` or `-7N`.
    Integer(BigInt),
    /// A hexadecimal integer, e.g. `0xFF`.
    Hexadecimal(BigInt),
    /// An octal integer, e.g. `0777`.
    Octal(BigInt),
    /// A base-N integer, e.g. `2r1010` or `36rZZ`.
    Radix(BigInt),
    /// An exact fraction, e.g. `22/7`.
    Rational(Rational),
    /// A floating-point literal, e.g. `3.14` or `1.0e10M`.
    Float(f64),
    /// A string literal with escapes already decoded.
    String(String),
    /// A character literal, e.g. `\a` or `\newline`.
    Char(char),
    /// `true` or `false`.
    Boolean(bool),
    /// The literal `nil`.
    Nil,
    /// A keyword without its leading `:`, e.g. `foo` or `ns/foo`.
    Keyword(String),
    /// A symbol, e.g. `foo`, `my.ns/bar`, or `/`.
    Symbol(String),
    /// `#` — introduces sets and tagged literals.
    Sharp,
    /// `^` — introduces a metadata attachment.
    Caret,
    /// `#_` — introduces a discarded form.
    Ignore,
    /// `##Inf`
    InfPos,
    /// `##-Inf`
    InfNeg,
    /// `##NaN`
    NaN,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::OpenList => write!(f, "("),
            TokenKind::CloseList => write!(f, ")"),
            TokenKind::OpenVector => write!(f, "["),
            TokenKind::CloseVector => write!(f, "]"),
            TokenKind::OpenMap => write!(f, "{{"),
            TokenKind::CloseMap => write!(f, "}}"),
            TokenKind::Integer(n) => write!(f, "{n}"),
            TokenKind::Hexadecimal(n) => write!(f, "{n}"),
            TokenKind::Octal(n) => write!(f, "{n}"),
            TokenKind::Radix(n) => write!(f, "{n}"),
            TokenKind::Rational(r) => write!(f, "{r}"),
            TokenKind::Float(x) => write!(f, "{x}"),
            TokenKind::String(s) => write!(f, "\"{s}\""),
            TokenKind::Char(c) => write!(f, "\\{c}"),
            TokenKind::Boolean(b) => write!(f, "{b}"),
            TokenKind::Nil => write!(f, "nil"),
            TokenKind::Keyword(name) => write!(f, ":{name}"),
            TokenKind::Symbol(name) => write!(f, "{name}"),
            TokenKind::Sharp => write!(f, "#"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::Ignore => write!(f, "#_"),
            TokenKind::InfPos => write!(f, "##Inf"),
            TokenKind::InfNeg => write!(f, "##-Inf"),
            TokenKind::NaN => write!(f, "##NaN"),
        }
    }
}

/// A token together with the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token class and payload.
    pub kind: TokenKind,
    /// 1-based line number of the first character of the lexeme.
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
