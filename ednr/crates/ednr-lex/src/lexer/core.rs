//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the trivia-skipping
//! loop, and the dispatch that routes each token to its lexing method.

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::lexer::name::is_name_start;
use crate::token::{Token, TokenKind};

/// The EDN lexer.
///
/// The lexer walks the source once, left to right, and either produces
/// the full token vector or stops at the first malformed lexeme. Rule
/// disambiguation is longest-match with the numeric rejection rules
/// tested first, then numerics by specificity, then the `##` sentinels,
/// delimiters, strings, characters, names.
///
/// # Example
///
/// ```
/// use ednr_lex::{Lexer, TokenKind};
///
/// let (tokens, _) = Lexer::new("(:a 1)").lex().unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1].kind, TokenKind::Keyword("a".to_string()));
/// ```
pub struct Lexer<'a> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_line: 1,
        }
    }

    /// Runs the lexer to completion.
    ///
    /// # Returns
    ///
    /// `(tokens, end_line)` where `end_line` is the line the cursor
    /// finished on, or the first [`LexError`]. Empty and whitespace-only
    /// input lexes successfully to an empty token vector; rejecting it
    /// is the parser's job.
    pub fn lex(mut self) -> Result<(Vec<Token>, u32), LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_trivia();
            if self.cursor.is_at_end() {
                break;
            }
            self.token_start = self.cursor.position();
            self.token_line = self.cursor.line();
            let kind = self.next_kind()?;
            tokens.push(Token::new(kind, self.token_line));
        }

        Ok((tokens, self.cursor.line()))
    }

    /// Lexes one token, dispatching on the current character.
    fn next_kind(&mut self) -> Result<TokenKind, LexError> {
        match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                Ok(TokenKind::OpenList)
            },
            ')' => {
                self.cursor.advance();
                Ok(TokenKind::CloseList)
            },
            '[' => {
                self.cursor.advance();
                Ok(TokenKind::OpenVector)
            },
            ']' => {
                self.cursor.advance();
                Ok(TokenKind::CloseVector)
            },
            '{' => {
                self.cursor.advance();
                Ok(TokenKind::OpenMap)
            },
            '}' => {
                self.cursor.advance();
                Ok(TokenKind::CloseMap)
            },
            '"' => self.lex_string(),
            '\\' => self.lex_char(),
            '^' => {
                self.cursor.advance();
                Ok(TokenKind::Caret)
            },
            '#' => Ok(self.lex_sharp()),
            ':' => Ok(self.lex_keyword()),
            '/' => {
                // a lone slash is a valid symbol; it never opens a name
                self.cursor.advance();
                Ok(TokenKind::Symbol("/".to_string()))
            },
            '+' | '-' => {
                if self.cursor.peek_char(1).is_ascii_digit() {
                    self.lex_number()
                } else {
                    Ok(self.lex_symbol())
                }
            },
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_name_start(c) => Ok(self.lex_symbol()),
            _ => {
                self.cursor.advance();
                Err(self.error(LexErrorKind::InvalidChar))
            },
        }
    }

    /// Lexes the forms introduced by `#`.
    ///
    /// The `##Inf` / `##-Inf` / `##NaN` sentinels and the `#_` discard
    /// marker are matched before the bare sharp, which the parser pairs
    /// with `{` for sets or a symbol for tagged literals.
    fn lex_sharp(&mut self) -> TokenKind {
        let rest = self.cursor.remaining();
        if rest.starts_with("##Inf") {
            self.cursor.advance_n(5);
            return TokenKind::InfPos;
        }
        if rest.starts_with("##-Inf") {
            self.cursor.advance_n(6);
            return TokenKind::InfNeg;
        }
        if rest.starts_with("##NaN") {
            self.cursor.advance_n(5);
            return TokenKind::NaN;
        }
        if self.cursor.peek_char(1) == '_' {
            self.cursor.advance_n(2);
            return TokenKind::Ignore;
        }
        self.cursor.advance();
        TokenKind::Sharp
    }

    /// Skips whitespace (including commas) and `;` line comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\n' | '\r' | ',' => self.cursor.advance(),
                ';' => {
                    while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                },
                _ => break,
            }
        }
    }

    /// Builds a [`LexError`] covering the current token's consumed run.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_line, self.cursor.slice_from(self.token_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).lex().expect("lex failure");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    fn lex_err(source: &str) -> LexError {
        Lexer::new(source).lex().expect_err("expected lex failure")
    }

    #[test]
    fn test_empty_input() {
        let (tokens, end_line) = Lexer::new("").lex().unwrap();
        assert!(tokens.is_empty());
        assert_eq!(end_line, 1);
    }

    #[test]
    fn test_whitespace_and_commas_skipped() {
        assert_eq!(kinds(" ,\t\r\n , "), vec![]);
    }

    #[test]
    fn test_comments_skipped() {
        let kinds = kinds("1 ; the rest of this line vanishes\n2");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer(BigInt::from(1)),
                TokenKind::Integer(BigInt::from(2)),
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            kinds("()[]{}"),
            vec![
                TokenKind::OpenList,
                TokenKind::CloseList,
                TokenKind::OpenVector,
                TokenKind::CloseVector,
                TokenKind::OpenMap,
                TokenKind::CloseMap,
            ]
        );
    }

    #[test]
    fn test_sharp_forms() {
        assert_eq!(
            kinds("# #_ #{"),
            vec![TokenKind::Sharp, TokenKind::Ignore, TokenKind::Sharp, TokenKind::OpenMap]
        );
    }

    #[test]
    fn test_special_float_sentinels() {
        assert_eq!(
            kinds("##Inf ##-Inf ##NaN"),
            vec![TokenKind::InfPos, TokenKind::InfNeg, TokenKind::NaN]
        );
    }

    #[test]
    fn test_double_sharp_without_sentinel() {
        // no sentinel matches, so the sharps fall through one at a time
        assert_eq!(
            kinds("##Foo"),
            vec![
                TokenKind::Sharp,
                TokenKind::Sharp,
                TokenKind::Symbol("Foo".to_string()),
            ]
        );
    }

    #[test]
    fn test_caret() {
        assert_eq!(
            kinds("^:a"),
            vec![TokenKind::Caret, TokenKind::Keyword("a".to_string())]
        );
    }

    #[test]
    fn test_lone_slash_is_symbol() {
        assert_eq!(kinds("/"), vec![TokenKind::Symbol("/".to_string())]);
    }

    #[test]
    fn test_line_numbers() {
        let (tokens, end_line) = Lexer::new("1\n2\n\n3").lex().unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
        assert_eq!(end_line, 4);
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex_err("@");
        assert_eq!(err.kind, LexErrorKind::InvalidChar);
        assert_eq!(err.lexeme, "@");
    }

    #[test]
    fn test_mixed_stream() {
        assert_eq!(
            kinds("(:key \"v\" 7)"),
            vec![
                TokenKind::OpenList,
                TokenKind::Keyword("key".to_string()),
                TokenKind::String("v".to_string()),
                TokenKind::Integer(BigInt::from(7)),
                TokenKind::CloseList,
            ]
        );
    }
}
