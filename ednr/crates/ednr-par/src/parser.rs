//! Recursive-descent parser over the token stream.
//!
//! The grammar is small and needs no backtracking: every token either
//! starts exactly one value form or is a grammar violation. Containers
//! recurse through `parse_value`; metadata nests right-associatively so
//! that in `^a ^b x` the first `^` ends up outermost.

use crate::error::ParseError;
use crate::value::{Special, Value};
use ednr_lex::{Token, TokenKind};

/// The EDN parser.
///
/// Consumes the token vector produced by the lexer and builds the
/// sequence of top-level values.
///
/// # Example
///
/// ```
/// use ednr_lex::lex;
/// use ednr_par::{Parser, Value};
///
/// let (tokens, end_line) = lex("1 2").unwrap();
/// let values = Parser::new(tokens, end_line).parse().unwrap();
/// assert_eq!(values, vec![Value::integer(1), Value::integer(2)]);
/// ```
pub struct Parser {
    tokens: std::iter::Peekable<std::vec::IntoIter<Token>>,

    /// Line the lexer finished on; reported when input ends too early.
    end_line: u32,

    /// Line of the most recently consumed token.
    last_line: u32,
}

impl Parser {
    /// Creates a parser over `tokens`. `end_line` is the line the lexer
    /// finished on, used for errors at end of input.
    pub fn new(tokens: Vec<Token>, end_line: u32) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            end_line,
            last_line: 1,
        }
    }

    /// Parses the whole stream into its top-level values.
    ///
    /// # Errors
    ///
    /// Empty input (no values at all) is a [`ParseError::MissingValue`];
    /// any grammar violation surfaces as the corresponding error with no
    /// partial result.
    pub fn parse(mut self) -> Result<Vec<Value>, ParseError> {
        let mut values = Vec::new();
        while self.peek().is_some() {
            values.push(self.parse_value()?);
        }
        if values.is_empty() {
            return Err(ParseError::MissingValue { line: self.end_line });
        }
        Ok(values)
    }

    /// Parses exactly one top-level value.
    ///
    /// # Errors
    ///
    /// Empty input is a [`ParseError::MissingValue`]; a second top-level
    /// form is reported as [`ParseError::Unexpected`] at its first token.
    pub fn parse_one(mut self) -> Result<Value, ParseError> {
        if self.peek().is_none() {
            return Err(ParseError::MissingValue { line: self.end_line });
        }
        let value = self.parse_value()?;
        match self.next() {
            None => Ok(value),
            Some(token) => Err(ParseError::Unexpected {
                token: token.kind,
                line: token.line,
            }),
        }
    }

    fn peek(&mut self) -> Option<&TokenKind> {
        self.tokens.peek().map(|t| &t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.next();
        if let Some(t) = &token {
            self.last_line = t.line;
        }
        token
    }

    /// Parses one value form.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let Some(token) = self.next() else {
            return Err(ParseError::MissingValue { line: self.last_line });
        };
        let line = token.line;

        match token.kind {
            TokenKind::Nil => Ok(Value::Nil),
            TokenKind::Boolean(b) => Ok(Value::Bool(b)),
            TokenKind::Integer(n)
            | TokenKind::Hexadecimal(n)
            | TokenKind::Octal(n)
            | TokenKind::Radix(n) => Ok(Value::Integer(n)),
            TokenKind::Float(x) => Ok(Value::Float(x)),
            TokenKind::Rational(r) => Ok(Value::Rational(r)),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::Char(c) => Ok(Value::Char(c)),
            TokenKind::Keyword(name) => Ok(Value::keyword(name)),
            TokenKind::Symbol(name) => Ok(Value::Symbol(name)),
            TokenKind::InfPos => Ok(Value::SpecialFloat(Special::PosInf)),
            TokenKind::InfNeg => Ok(Value::SpecialFloat(Special::NegInf)),
            TokenKind::NaN => Ok(Value::SpecialFloat(Special::NaN)),
            TokenKind::OpenList => {
                let (items, _) = self.parse_items(TokenKind::CloseList, line)?;
                Ok(Value::List(items))
            },
            TokenKind::OpenVector => {
                let (items, _) = self.parse_items(TokenKind::CloseVector, line)?;
                Ok(Value::Vector(items))
            },
            TokenKind::OpenMap => self.parse_map(line),
            TokenKind::Sharp => self.parse_sharp(line),
            TokenKind::Ignore => {
                let discarded = self.parse_value()?;
                Ok(Value::Discard(Box::new(discarded)))
            },
            TokenKind::Caret => {
                let meta = self.parse_value()?;
                let target = self.parse_value()?;
                Ok(Value::Metadata(Box::new(target), Box::new(meta)))
            },
            kind => Err(ParseError::Unexpected { token: kind, line }),
        }
    }

    /// Parses values until `close`, returning them with the closing
    /// token's line.
    fn parse_items(
        &mut self,
        close: TokenKind,
        open_line: u32,
    ) -> Result<(Vec<Value>, u32), ParseError> {
        let mut items = Vec::new();
        loop {
            let at_close = match self.peek() {
                None => return Err(ParseError::UnclosedContainer { line: open_line }),
                Some(kind) => *kind == close,
            };
            if at_close {
                // the peek guarantees a token is present
                let close_line = self.next().map_or(open_line, |t| t.line);
                return Ok((items, close_line));
            }
            items.push(self.parse_value()?);
        }
    }

    /// Parses a map body. The opening `{` is consumed.
    fn parse_map(&mut self, open_line: u32) -> Result<Value, ParseError> {
        let (items, close_line) = self.parse_items(TokenKind::CloseMap, open_line)?;

        if items.len() % 2 != 0 {
            return Err(ParseError::MissingValue { line: close_line });
        }

        let mut pairs = Vec::with_capacity(items.len() / 2);
        let mut iter = items.into_iter();
        while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
            pairs.push((key, value));
        }
        Ok(Value::Map(pairs))
    }

    /// Parses the form after a bare `#`: a set body or a tagged literal.
    fn parse_sharp(&mut self, sharp_line: u32) -> Result<Value, ParseError> {
        match self.next() {
            Some(token) => match token.kind {
                TokenKind::OpenMap => {
                    let (items, _) = self.parse_items(TokenKind::CloseMap, token.line)?;
                    Ok(Value::Set(items))
                },
                TokenKind::Symbol(tag) => {
                    let value = self.parse_value()?;
                    Ok(Value::Tagged(tag, Box::new(value)))
                },
                kind => Err(ParseError::Unexpected {
                    token: kind,
                    line: token.line,
                }),
            },
            None => Err(ParseError::MissingValue { line: sharp_line }),
        }
    }
}
