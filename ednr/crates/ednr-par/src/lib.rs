//! ednr-par - Parser and value tree for EDN.
//!
//! This crate owns the [`Value`] sum type — the tagged tree every later
//! stage works on — and the recursive-descent parser that builds it from
//! the token stream produced by `ednr-lex`. It also carries the metadata
//! utilities, which are plain tree rewrites.
//!
//! The parser returns either the full sequence of top-level values or a
//! [`ParseError`]; no partial tree survives a failure.
//!
//! # Example
//!
//! ```
//! use ednr_lex::lex;
//! use ednr_par::{Parser, Value};
//!
//! let (tokens, end_line) = lex("[1 :a]").unwrap();
//! let values = Parser::new(tokens, end_line).parse().unwrap();
//! assert_eq!(
//!     values,
//!     vec![Value::Vector(vec![Value::integer(1), Value::keyword("a")])]
//! );
//! ```

pub mod error;
pub mod meta;
pub mod parser;
pub mod value;

pub use error::ParseError;
pub use parser::Parser;
pub use value::{Special, Value};

// the fraction payload is shared with the token stream
pub use ednr_lex::Rational;
