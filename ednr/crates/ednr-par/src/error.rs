//! Parser error types.

use thiserror::Error;

use ednr_lex::TokenKind;

/// A grammar violation, reported with the line it was detected on.
///
/// A failing parse returns only this error; no partial tree is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token no grammar rule expected at this point — a stray closing
    /// delimiter, or a `#` followed by neither `{` nor a symbol.
    #[error("unexpected token `{token}` at line {line}")]
    Unexpected {
        /// The offending token.
        token: TokenKind,
        /// Line of the offending token.
        line: u32,
    },

    /// Input ended inside a list, vector, set, or map.
    #[error("unclosed container opened at line {line}")]
    UnclosedContainer {
        /// Line of the opening delimiter.
        line: u32,
    },

    /// A value was required and none was present: empty input, a map
    /// with a dangling key, or a prefix form at end of input.
    #[error("missing value at line {line}")]
    MissingValue {
        /// Line where the value was expected.
        line: u32,
    },
}

impl ParseError {
    /// The line the error is reported against.
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Unexpected { line, .. }
            | ParseError::UnclosedContainer { line }
            | ParseError::MissingValue { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::Unexpected {
            token: TokenKind::CloseList,
            line: 2,
        };
        assert_eq!(err.to_string(), "unexpected token `)` at line 2");

        let err = ParseError::UnclosedContainer { line: 1 };
        assert_eq!(err.to_string(), "unclosed container opened at line 1");
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(ParseError::MissingValue { line: 7 }.line(), 7);
    }
}
