//! Keyword, symbol, boolean, and nil lexing.
//!
//! Keywords and symbols share one body alphabet; they differ only in the
//! leading `:` and in which characters may open a symbol. The reserved
//! words `true`, `false`, and `nil` are carved out of the symbol space
//! after the run is scanned.

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Characters that may open a symbol.
///
/// `+` and `-` may also open a symbol, but only when not followed by a
/// digit; the dispatch in `core` owns that distinction. `/` alone is a
/// symbol but never opens a longer one.
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            '.' | '*' | '!' | '_' | '?' | '$' | '%' | '&' | '=' | '<' | '>'
        )
}

/// Characters that may continue a keyword or symbol body.
pub(crate) fn is_name_continue(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || matches!(c, '+' | '-' | '/' | ':' | '#')
}

impl<'a> Lexer<'a> {
    /// Lexes a keyword. Entered with the cursor on the `:`.
    pub(crate) fn lex_keyword(&mut self) -> TokenKind {
        self.cursor.advance();
        let start = self.cursor.position();
        while is_name_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        TokenKind::Keyword(self.cursor.slice_from(start).to_string())
    }

    /// Lexes a symbol or one of the reserved words.
    pub(crate) fn lex_symbol(&mut self) -> TokenKind {
        let start = self.cursor.position();
        while is_name_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        match self.cursor.slice_from(start) {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            "nil" => TokenKind::Nil,
            name => TokenKind::Symbol(name.to_string()),
        }
    }
}
