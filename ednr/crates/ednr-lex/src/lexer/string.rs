//! String literal lexing.

use crate::error::{LexError, LexErrorKind};
use crate::lexer::Lexer;
use crate::token::TokenKind;

impl<'a> Lexer<'a> {
    /// Lexes a string literal, decoding escape sequences.
    ///
    /// Strings may span lines; only end of input before the closing `"`
    /// is an error. The recognized escapes are `\n` `\t` `\r` `\b` `\f`
    /// `\"` `\\`; any other backslash pair is kept verbatim.
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }

            let c = self.cursor.current_char();

            if c == '"' {
                self.cursor.advance();
                return Ok(TokenKind::String(content));
            }

            if c == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    return Err(self.error(LexErrorKind::UnterminatedString));
                }
                let escaped = self.cursor.current_char();
                self.cursor.advance();
                match escaped {
                    'n' => content.push('\n'),
                    't' => content.push('\t'),
                    'r' => content.push('\r'),
                    'b' => content.push('\u{0008}'),
                    'f' => content.push('\u{000C}'),
                    '"' => content.push('"'),
                    '\\' => content.push('\\'),
                    other => {
                        // unknown escapes pass through untouched
                        content.push('\\');
                        content.push(other);
                    },
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }
    }
}
