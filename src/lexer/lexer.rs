use std::sync::Arc;

use crate::{
    errors::errors::{Error, ErrorImpl, NumeralFault},
    numeral::radix::{check_radix, convert, format_exponent, parse_exponent, parse_radix},
    syntax::syntax::Syntax,
    Position, MK_EOF_TOKEN, MK_TOKEN,
};

use super::tokens::{Token, Type};

/// An unbounded source of tokens.
///
/// Once the source is exhausted every call to `next_token` returns the
/// end-of-stream token, so a consumer never has to ask whether more input
/// exists.
pub trait Lexer {
    fn next_token(&mut self) -> Result<Token, Error>;

    fn source(&self) -> String;

    /// Replaces the source text and rewinds to its start.
    fn set_source(&mut self, source: &str);
}

/// Where in the source to lex and which radix numerals default to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub start: usize,
    pub end: Option<usize>,
    pub radix: u32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            start: 0,
            end: None,
            radix: 10,
        }
    }
}

impl LexerConfig {
    /// Lex only the characters in `start..end`.
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = Some(end);
        self
    }

    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    fn select(&self, source: &str) -> Result<Vec<char>, Error> {
        let chars: Vec<char> = source.chars().collect();
        let len = chars.len();
        let end = self.end.unwrap_or(len);

        if self.start > end || end > len {
            return Err(Error::new(
                ErrorImpl::InvalidRange {
                    start: self.start,
                    end,
                    len,
                },
                Position::null(),
            ));
        }

        Ok(chars[self.start..end].to_vec())
    }
}

/// Which characters introduce an exponent in a numeral.
pub(crate) struct NumeralRules {
    /// Markers that always start an exponent.
    pub markers: &'static [char],
    /// Markers that only start an exponent when a sign follows.
    pub signed_markers: &'static [char],
}

/// The cursor and grammar shared by both lexers.
pub(crate) struct LexerCore<E, P> {
    pub syntax: Arc<Syntax<E, P>>,
    pub name_type: Type,
    pub source: Vec<char>,
    pub pos: usize,
    pub radix: u32,
}

impl<E, P> LexerCore<E, P> {
    pub fn new(
        source: &str,
        syntax: Arc<Syntax<E, P>>,
        config: LexerConfig,
    ) -> Result<Self, Error> {
        check_radix(config.radix).map_err(|_| {
            Error::new(
                ErrorImpl::InvalidRadix {
                    radix: config.radix,
                },
                Position::null(),
            )
        })?;

        let name_type = syntax.name_type().ok_or_else(|| {
            Error::ill_formed(ErrorImpl::MissingSyntaxRole { role: "name type" })
        })?;

        Ok(LexerCore {
            source: config.select(source)?,
            syntax,
            name_type,
            pos: 0,
            radix: config.radix,
        })
    }

    pub fn set_radix(&mut self, radix: u32) -> Result<(), Error> {
        check_radix(radix).map_err(|_| {
            Error::new(ErrorImpl::InvalidRadix { radix }, Position(self.pos as u32))
        })?;

        self.radix = radix;
        Ok(())
    }

    pub fn source(&self) -> String {
        self.source.iter().collect()
    }

    pub fn set_source(&mut self, source: &str) {
        self.source = source.chars().collect();
        self.pos = 0;
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn skip_whitespace(&mut self) {
        while self.at().is_some_and(|c| self.syntax.is_whitespace(c)) {
            self.advance();
        }
    }

    pub fn unknown_token(&mut self, c: char) -> Error {
        let error = Error::new(ErrorImpl::UnknownToken { token: c }, Position(self.pos as u32));
        self.advance();
        error
    }

    /// Reads a punctuator, taking two characters when `compound` accepts
    /// the pair.
    pub fn lex_symbol(&mut self, compound: impl Fn(&str) -> Option<Type>) -> Result<Token, Error> {
        let start = self.pos;
        let Some(c) = self.at() else {
            return Ok(MK_EOF_TOKEN!(start));
        };

        if let Some(next) = self.peek(1) {
            let pair: String = [c, next].iter().collect();
            if let Some(kind) = compound(&pair) {
                self.pos += 2;
                return Ok(MK_TOKEN!(kind, pair, start));
            }
        }

        match self.syntax.type_of(c) {
            Some(kind) => {
                self.advance();
                Ok(MK_TOKEN!(kind, c.to_string(), start))
            }
            None => Err(self.unknown_token(c)),
        }
    }

    /// Reads the longest run of registered letters as a name.
    pub fn lex_name(&mut self) -> Token {
        let start = self.pos;
        let mut name = String::new();

        while let Some(c) = self.at().filter(|c| self.syntax.is_letter(*c)) {
            name.push(c);
            self.advance();
        }

        MK_TOKEN!(self.name_type, name, start)
    }

    /// Reads a numeral and re-expresses any `_radix` suffixed part in the
    /// lexer's radix.
    ///
    /// The lexeme has the form `<digits>[.<digits>][{e|p}<sign><digits>]`
    /// with upper case digits.
    pub fn lex_numeral(&mut self, rules: &NumeralRules) -> Result<Token, Error> {
        let start = self.pos;

        let mut mantissa = String::new();
        let mut seen_point = false;
        while let Some(c) = self.at() {
            // a marker only ends the mantissa once it holds a digit, so `E+1`
            // in radix 16 is the digit `E`
            if !mantissa.is_empty() && self.exponent_starts(rules) {
                break;
            } else if self.syntax.is_digit(c) {
                mantissa.push(c.to_ascii_uppercase());
            } else if c == '.' && !seen_point {
                seen_point = true;
                mantissa.push(c);
            } else {
                break;
            }
            self.advance();
        }

        if self.at() == Some('_') {
            self.advance();
            let radix = self.lex_radix_suffix(start)?;
            mantissa = convert(&mantissa, radix, self.radix)
                .map_err(|fault| self.malformed(start, fault))?;
        }

        let mut lexeme = mantissa;

        if !lexeme.is_empty() && self.exponent_starts(rules) {
            if let Some(marker) = self.at() {
                lexeme.push(marker.to_ascii_lowercase());
                self.advance();
            }

            let mut exponent = String::new();
            if let Some(sign) = self.at().filter(|c| *c == '+' || *c == '-') {
                exponent.push(sign);
                self.advance();
            }
            while let Some(c) = self.at().filter(|c| self.syntax.is_digit(*c)) {
                exponent.push(c.to_ascii_uppercase());
                self.advance();
            }

            if exponent.trim_start_matches(['+', '-']).is_empty() {
                return Err(self.malformed(start, NumeralFault::MissingExponent));
            }

            if self.at() == Some('_') {
                self.advance();
                let radix = self.lex_radix_suffix(start)?;
                let value = parse_exponent(&exponent, radix)
                    .map_err(|fault| self.malformed(start, fault))?;
                exponent = format_exponent(value, self.radix)
                    .map_err(|fault| self.malformed(start, fault))?;
            }

            lexeme.push_str(&exponent);
        }

        Ok(MK_TOKEN!(self.name_type, lexeme, start))
    }

    fn exponent_starts(&self, rules: &NumeralRules) -> bool {
        match self.at() {
            Some(c) if rules.markers.contains(&c) => true,
            Some(c) if rules.signed_markers.contains(&c) => {
                matches!(self.peek(1), Some('+') | Some('-'))
            }
            _ => false,
        }
    }

    fn lex_radix_suffix(&mut self, start: usize) -> Result<u32, Error> {
        let mut digits = String::new();
        while let Some(c) = self.at().filter(|c| c.is_ascii_digit()) {
            digits.push(c);
            self.advance();
        }

        parse_radix(&digits).map_err(|fault| self.malformed(start, fault))
    }

    fn malformed(&self, start: usize, fault: NumeralFault) -> Error {
        let numeral: String = self.source[start..self.pos].iter().collect();
        Error::new(
            ErrorImpl::MalformedNumeral { numeral, fault },
            Position(start as u32),
        )
    }
}
