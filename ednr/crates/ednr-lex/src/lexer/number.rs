//! Numeric literal lexing.
//!
//! EDN carries an unusually rich numeric surface: decimal integers with
//! an optional `N` marker, hexadecimal (`0xFF`), octal (`0777`), runs of
//! zeros, arbitrary-base radix literals (`2r1010`), exact fractions
//! (`22/7`), and floats with an optional `M` marker. The rules here are
//! tested in specificity order so that every lexeme lands in exactly one
//! class, and the malformed runs of each class are consumed whole and
//! reported as lexical errors.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{LexError, LexErrorKind};
use crate::lexer::Lexer;
use crate::token::{Rational, TokenKind};

/// Folds a pre-validated digit run into an integer in the given base.
fn decode_digits(digits: &str, base: u32) -> BigInt {
    let mut value = BigInt::from(0u8);
    for c in digits.chars() {
        // callers validate every digit against the base first
        let d = c.to_digit(base).unwrap_or(0);
        value = value * base + d;
    }
    value
}

/// Applies the extracted sign to a decoded magnitude.
fn signed(negative: bool, value: BigInt) -> BigInt {
    if negative {
        -value
    } else {
        value
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// Entered with the cursor on a digit, or on a `+`/`-` that is
    /// immediately followed by a digit.
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind, LexError> {
        let negative = match self.cursor.current_char() {
            '+' => {
                self.cursor.advance();
                false
            },
            '-' => {
                self.cursor.advance();
                true
            },
            _ => false,
        };

        // hexadecimal is the most specific prefix form
        if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
            && self.cursor.peek_char(2).is_ascii_alphanumeric()
        {
            self.cursor.advance_n(2);
            return self.lex_hexadecimal(negative);
        }

        let digits_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let digits = self.cursor.slice_from(digits_start);

        match self.cursor.current_char() {
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_float(),
            '/' if self.cursor.peek_char(1) == '/' => {
                // a doubled slash can never open a valid fraction or
                // symbol continuation of a number; consume the run
                while matches!(self.cursor.current_char(), '/' | '0'..='9') {
                    self.cursor.advance();
                }
                Err(self.error(LexErrorKind::InvalidRational))
            },
            '/' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_rational(negative, digits),
            'r' | 'R' if self.cursor.peek_char(1).is_ascii_alphanumeric() => {
                self.lex_radix(negative, digits)
            },
            _ => self.classify_integer(negative, digits),
        }
    }

    /// Classifies a bare digit run: zero-run, octal, or decimal integer.
    fn classify_integer(&mut self, negative: bool, digits: &str) -> Result<TokenKind, LexError> {
        if digits.starts_with('0') {
            if digits.bytes().all(|b| b == b'0') {
                return Ok(TokenKind::Integer(BigInt::from(0)));
            }
            if digits.bytes().any(|b| matches!(b, b'8' | b'9')) {
                return Err(self.error(LexErrorKind::InvalidOctal));
            }
            return Ok(TokenKind::Octal(signed(negative, decode_digits(digits, 8))));
        }

        // arbitrary-precision marker, accepted and discarded
        self.cursor.match_char('N');
        Ok(TokenKind::Integer(signed(negative, decode_digits(digits, 10))))
    }

    /// Lexes the digit run of a `0x` literal. The prefix is consumed.
    fn lex_hexadecimal(&mut self, negative: bool) -> Result<TokenKind, LexError> {
        let run_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }
        let run = self.cursor.slice_from(run_start);

        if !run.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.error(LexErrorKind::InvalidHexadecimal));
        }
        Ok(TokenKind::Hexadecimal(signed(negative, decode_digits(run, 16))))
    }

    /// Lexes a base-N literal. The cursor sits on `r`/`R`; `base_digits`
    /// is the already-consumed digit run naming the base.
    fn lex_radix(&mut self, negative: bool, base_digits: &str) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        let run_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }

        let base: u32 = base_digits.parse().unwrap_or(u32::MAX);
        if !(2..=36).contains(&base) {
            return Err(self.error(LexErrorKind::InvalidRadix));
        }

        let run = self.cursor.slice_from(run_start);
        if !run.chars().all(|c| c.to_digit(base).is_some()) {
            return Err(self.error(LexErrorKind::InvalidRadix));
        }
        Ok(TokenKind::Radix(signed(negative, decode_digits(run, base))))
    }

    /// Lexes the denominator of a fraction. The cursor sits on `/`;
    /// `numerator_digits` is the already-consumed numerator run.
    fn lex_rational(
        &mut self,
        negative: bool,
        numerator_digits: &str,
    ) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        let den_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let den_digits = self.cursor.slice_from(den_start);

        let denominator = decode_digits(den_digits, 10);
        if denominator.is_zero() {
            return Err(self.error(LexErrorKind::InvalidRational));
        }

        let numerator = signed(negative, decode_digits(numerator_digits, 10));
        Ok(TokenKind::Rational(Rational::new(numerator, denominator)))
    }

    /// Lexes the fractional part, optional exponent, and optional `M`
    /// marker of a float. The sign and integer part are consumed; the
    /// cursor sits on the `.` with a digit after it.
    fn lex_float(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let c = self.cursor.current_char();
        if c == 'e' || c == 'E' {
            let mut offset = 1;
            if matches!(self.cursor.peek_char(1), '+' | '-') {
                offset = 2;
            }
            // only commit to the exponent when digits actually follow
            if self.cursor.peek_char(offset).is_ascii_digit() {
                self.cursor.advance_n(offset);
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        // exact-precision marker, accepted and discarded
        self.cursor.match_char('M');

        // the scanned shape is always a parseable f64 lexeme
        let value = lexeme.parse::<f64>().unwrap_or_default();
        Ok(TokenKind::Float(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn lex_one(source: &str) -> TokenKind {
        let (tokens, _) = Lexer::new(source).lex().expect("lex failure");
        assert_eq!(tokens.len(), 1, "expected a single token for {source:?}");
        tokens.into_iter().next().map(|t| t.kind).unwrap()
    }

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).lex().expect("lex failure");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    fn lex_err(source: &str) -> LexError {
        Lexer::new(source).lex().expect_err("expected lex failure")
    }

    fn int(n: i64) -> TokenKind {
        TokenKind::Integer(BigInt::from(n))
    }

    #[test]
    fn test_decimal_integers() {
        assert_eq!(lex_one("42"), int(42));
        assert_eq!(lex_one("-7"), int(-7));
        assert_eq!(lex_one("+5"), int(5));
    }

    #[test]
    fn test_zero_runs() {
        for source in ["0", "00", "000", "+0", "-0"] {
            assert_eq!(lex_one(source), int(0), "source {source:?}");
        }
    }

    #[test]
    fn test_bigint_marker_discarded() {
        assert_eq!(lex_one("123N"), int(123));
        assert_eq!(lex_one("-9N"), int(-9));
    }

    #[test]
    fn test_huge_integer() {
        let source = "123456789012345678901234567890";
        let expected: BigInt = source.parse().unwrap();
        assert_eq!(lex_one(source), TokenKind::Integer(expected));
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(lex_one("0xFF"), TokenKind::Hexadecimal(BigInt::from(255)));
        assert_eq!(lex_one("0Xff"), TokenKind::Hexadecimal(BigInt::from(255)));
        assert_eq!(lex_one("-0x10"), TokenKind::Hexadecimal(BigInt::from(-16)));
    }

    #[test]
    fn test_invalid_hexadecimal() {
        let err = lex_err("0xFG");
        assert_eq!(err.kind, LexErrorKind::InvalidHexadecimal);
        assert_eq!(err.lexeme, "0xFG");
    }

    #[test]
    fn test_octal() {
        assert_eq!(lex_one("0777"), TokenKind::Octal(BigInt::from(511)));
        assert_eq!(lex_one("-017"), TokenKind::Octal(BigInt::from(-15)));
    }

    #[test]
    fn test_invalid_octal() {
        let err = lex_err("0778");
        assert_eq!(err.kind, LexErrorKind::InvalidOctal);
        assert_eq!(err.lexeme, "0778");
    }

    #[test]
    fn test_radix() {
        assert_eq!(lex_one("2r1010"), TokenKind::Radix(BigInt::from(10)));
        assert_eq!(lex_one("16rFF"), TokenKind::Radix(BigInt::from(255)));
        assert_eq!(lex_one("36rZZ"), TokenKind::Radix(BigInt::from(1295)));
        assert_eq!(lex_one("-8r17"), TokenKind::Radix(BigInt::from(-15)));
        assert_eq!(lex_one("3R12"), TokenKind::Radix(BigInt::from(5)));
    }

    #[test]
    fn test_radix_base_out_of_range() {
        assert_eq!(lex_err("1r0").kind, LexErrorKind::InvalidRadix);
        assert_eq!(lex_err("37rZ").kind, LexErrorKind::InvalidRadix);
        assert_eq!(lex_err("0r1").kind, LexErrorKind::InvalidRadix);
    }

    #[test]
    fn test_radix_digit_out_of_range() {
        let err = lex_err("2r1012");
        assert_eq!(err.kind, LexErrorKind::InvalidRadix);
        assert_eq!(err.lexeme, "2r1012");
    }

    #[test]
    fn test_rational() {
        assert_eq!(
            lex_one("22/7"),
            TokenKind::Rational(Rational::new(BigInt::from(22), BigInt::from(7)))
        );
        assert_eq!(
            lex_one("-1/2"),
            TokenKind::Rational(Rational::new(BigInt::from(-1), BigInt::from(2)))
        );
    }

    #[test]
    fn test_rational_zero_denominator() {
        assert_eq!(lex_err("1/0").kind, LexErrorKind::InvalidRational);
        assert_eq!(lex_err("5/000").kind, LexErrorKind::InvalidRational);
    }

    #[test]
    fn test_rational_doubled_slash() {
        let err = lex_err("22//7");
        assert_eq!(err.kind, LexErrorKind::InvalidRational);
        assert_eq!(err.lexeme, "22//7");
    }

    #[test]
    fn test_floats() {
        assert_eq!(lex_one("3.14"), TokenKind::Float(3.14));
        assert_eq!(lex_one("-0.5"), TokenKind::Float(-0.5));
        assert_eq!(lex_one("1.5e3"), TokenKind::Float(1500.0));
        assert_eq!(lex_one("2.5e-3"), TokenKind::Float(0.0025));
        assert_eq!(lex_one("1.5E+2"), TokenKind::Float(150.0));
    }

    #[test]
    fn test_float_precision_marker_discarded() {
        assert_eq!(lex_one("3.14M"), TokenKind::Float(3.14));
    }

    #[test]
    fn test_exponent_without_digits_is_not_consumed() {
        // "1.5" lexes as a float and the dangling "e" as a symbol
        assert_eq!(
            lex_all("1.5e"),
            vec![TokenKind::Float(1.5), TokenKind::Symbol("e".to_string())]
        );
    }

    #[test]
    fn test_integer_then_trailing_name() {
        // longest-match stops the integer at the first non-digit
        assert_eq!(
            lex_all("1e5"),
            vec![int(1), TokenKind::Symbol("e5".to_string())]
        );
    }

    #[test]
    fn test_bare_hex_prefix_splits() {
        assert_eq!(
            lex_all("0x"),
            vec![int(0), TokenKind::Symbol("x".to_string())]
        );
    }

    #[test]
    fn test_slash_without_denominator_splits() {
        assert_eq!(
            lex_all("22/ 3"),
            vec![int(22), TokenKind::Symbol("/".to_string()), int(3)]
        );
    }

    #[test]
    fn test_property_decimal_decoding() {
        use proptest::prelude::*;

        proptest!(|(n in any::<i64>())| {
            let source = n.to_string();
            prop_assert_eq!(lex_one(&source), int(n));
        });
    }

    #[test]
    fn test_property_hex_decoding() {
        use proptest::prelude::*;

        proptest!(|(n in any::<u64>())| {
            let source = format!("0x{n:X}");
            prop_assert_eq!(lex_one(&source), TokenKind::Hexadecimal(BigInt::from(n)));
        });
    }

    #[test]
    fn test_property_radix_decoding_matches_base() {
        use proptest::prelude::*;

        proptest!(|(n in any::<u32>(), base in 2u32..=36)| {
            let mut digits = String::new();
            let mut rest = n;
            loop {
                let d = std::char::from_digit(rest % base, base).unwrap();
                digits.insert(0, d);
                rest /= base;
                if rest == 0 {
                    break;
                }
            }
            let source = format!("{base}r{digits}");
            prop_assert_eq!(lex_one(&source), TokenKind::Radix(BigInt::from(n)));
        });
    }
}
