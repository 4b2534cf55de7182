//! Character literal lexing.

use crate::error::{LexError, LexErrorKind};
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// The four character names the reader recognizes.
const NAMED_CHARS: [(&str, char); 4] = [
    ("newline", '\n'),
    ("return", '\r'),
    ("tab", '\t'),
    ("space", ' '),
];

impl<'a> Lexer<'a> {
    /// Lexes a character literal.
    ///
    /// Entered with the cursor on the backslash. The named forms
    /// `\newline` `\return` `\tab` `\space` are matched first; any
    /// other single character maps to its own code point.
    pub(crate) fn lex_char(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();

        let rest = self.cursor.remaining();
        for (name, value) in NAMED_CHARS {
            if rest.starts_with(name) {
                self.cursor.advance_n(name.len());
                return Ok(TokenKind::Char(value));
            }
        }

        let c = self.cursor.current_char();
        if self.cursor.is_at_end() || c == '\n' {
            return Err(self.error(LexErrorKind::InvalidChar));
        }
        self.cursor.advance();
        Ok(TokenKind::Char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).lex().expect("lex failure");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_named_characters() {
        assert_eq!(
            lex_all("\\newline \\return \\tab \\space"),
            vec![
                TokenKind::Char('\n'),
                TokenKind::Char('\r'),
                TokenKind::Char('\t'),
                TokenKind::Char(' '),
            ]
        );
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(lex_all("\\a"), vec![TokenKind::Char('a')]);
        assert_eq!(lex_all("\\7"), vec![TokenKind::Char('7')]);
        assert_eq!(lex_all("\\("), vec![TokenKind::Char('(')]);
        assert_eq!(lex_all("\\\\"), vec![TokenKind::Char('\\')]);
    }

    #[test]
    fn test_unicode_character() {
        assert_eq!(lex_all("\\λ"), vec![TokenKind::Char('λ')]);
    }

    #[test]
    fn test_name_prefix_requires_full_name() {
        // "ta" does not complete "tab", so the first character wins
        assert_eq!(
            lex_all("\\ta"),
            vec![TokenKind::Char('t'), TokenKind::Symbol("a".to_string())]
        );
    }

    #[test]
    fn test_name_with_trailing_run() {
        assert_eq!(
            lex_all("\\newlinex"),
            vec![TokenKind::Char('\n'), TokenKind::Symbol("x".to_string())]
        );
    }

    #[test]
    fn test_backslash_at_end_of_input() {
        let err = Lexer::new("\\").lex().expect_err("should fail");
        assert_eq!(err.kind, LexErrorKind::InvalidChar);
    }

    #[test]
    fn test_backslash_before_newline() {
        let err = Lexer::new("\\\nx").lex().expect_err("should fail");
        assert_eq!(err.kind, LexErrorKind::InvalidChar);
    }
}
