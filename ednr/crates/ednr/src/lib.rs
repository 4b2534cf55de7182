//! ednr - An EDN reader.
//!
//! The pipeline is a straight fan-in over four phase crates:
//!
//! ```text
//! text ── ednr-lex ──▶ tokens ── ednr-par ──▶ Value ──┬── ednr-print ──▶ text
//!                                                     └── ednr-host ───▶ HostValue
//! ```
//!
//! This crate is the driver: it wires the phases together behind the
//! entry points most callers want ([`parse`], [`parse_one`],
//! [`parse_file`], [`print`], [`normalize`]) and folds the phase errors
//! into one [`Error`] type. Everything the phase crates export is
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use ednr::{parse_one, print, Value};
//!
//! let value = parse_one("{:name \"edn\" :tags #{:data}}").unwrap();
//! assert_eq!(print(&value), "{:name \"edn\" :tags #{:data}}");
//! ```
//!
//! All output is UTF-8; `print(&value).into_bytes()` gives the rendered
//! byte sequence.

use std::fs;
use std::path::Path;

use thiserror::Error;

pub use ednr_host::{
    normalize, DiscardBehavior, Handlers, HostValue, NormalizeError, TagHandler,
};
pub use ednr_lex::{lex, LexError, LexErrorKind, Lexer, Rational, Token, TokenKind};
pub use ednr_par::meta::{get_metadata, merge_metadata, strip_metadata, with_metadata};
pub use ednr_par::{ParseError, Parser, Special, Value};
pub use ednr_print::{print, print_all, print_with, PrintOptions};

/// Any failure a reader entry point can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed lexeme.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A grammar violation.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A normalization failure.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The file could not be read.
    #[error("failed to read `{path}`: {source}")]
    File {
        /// The path as given.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The path does not end in `.edn`.
    #[error("expected a .edn file, found extension `{0}`")]
    InvalidExtension(String),
}

/// Parses EDN text into its sequence of top-level values.
///
/// # Errors
///
/// The first [`LexError`] or [`ParseError`] encountered; lexing failures
/// short-circuit before parsing begins. Empty input is a parse error.
pub fn parse(source: &str) -> Result<Vec<Value>, Error> {
    let (tokens, end_line) = lex(source)?;
    Ok(Parser::new(tokens, end_line).parse()?)
}

/// Parses EDN text containing exactly one top-level value.
pub fn parse_one(source: &str) -> Result<Value, Error> {
    let (tokens, end_line) = lex(source)?;
    Ok(Parser::new(tokens, end_line).parse_one()?)
}

/// Reads and parses an `.edn` file.
///
/// # Errors
///
/// [`Error::InvalidExtension`] when the file name does not end in
/// `.edn`, [`Error::File`] when it cannot be read, and the usual lex and
/// parse errors for its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Value>, Error> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension != "edn" {
        return Err(Error::InvalidExtension(extension.to_string()));
    }

    let source = fs::read_to_string(path).map_err(|source| Error::File {
        path: path.display().to_string(),
        source,
    })?;
    parse(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unwraps_phases() {
        assert_eq!(parse("1 2").unwrap().len(), 2);
        assert!(matches!(parse("0xGG"), Err(Error::Lex(_))));
        assert!(matches!(parse("("), Err(Error::Parse(_))));
        assert!(matches!(parse(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_one_rejects_trailing_forms() {
        assert_eq!(parse_one(":a").unwrap(), Value::keyword("a"));
        assert!(matches!(parse_one(":a :b"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_error_display() {
        let err = parse("0778").unwrap_err();
        assert_eq!(err.to_string(), "invalid octal literal at line 1: `0778`");
    }
}
