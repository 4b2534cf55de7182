//! ednr-lex - Tokenizer for EDN source text.
//!
//! This crate turns a character buffer into a stream of [`Token`]s with
//! 1-based line numbers, or a [`LexError`] naming the offending lexeme
//! and the line it started on.
//!
//! Lexing is a pure, single-pass transformation: the input is read once,
//! nothing is cached, and two inputs can be lexed in parallel without any
//! coordination.
//!
//! # Example
//!
//! ```
//! use ednr_lex::{lex, TokenKind};
//!
//! let (tokens, end_line) = lex("[1 :two]").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::OpenVector);
//! assert_eq!(tokens[2].kind, TokenKind::Keyword("two".to_string()));
//! assert_eq!(end_line, 1);
//! ```

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{Rational, Token, TokenKind};

/// Tokenizes `source`.
///
/// # Returns
///
/// The token vector and the line number the cursor finished on, or the
/// first lexical error encountered.
pub fn lex(source: &str) -> Result<(Vec<Token>, u32), LexError> {
    Lexer::new(source).lex()
}
