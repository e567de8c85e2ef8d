use std::fmt::Debug;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Type,
    parser::lookups::{InfixHandler, PrefixHandler},
};

use super::syntax::Syntax;

/// Write-once constructor for a [`Syntax`].
///
/// Every registration is checked when it is made and consumes the builder,
/// so a failed step hands back an error instead of a half-built grammar:
///
/// ```ignore
/// let syntax = SyntaxBuilder::new()
///     .register_punctuators("()+")?
///     .register_grouping(&['(', ')'])?
///     .build();
/// ```
pub struct SyntaxBuilder<E, P> {
    syntax: Syntax<E, P>,
    non_decimal_digits: bool,
}

impl<E, P> Default for SyntaxBuilder<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P> SyntaxBuilder<E, P> {
    pub fn new() -> Self {
        SyntaxBuilder {
            syntax: Syntax::empty(),
            non_decimal_digits: false,
        }
    }

    /// A builder that accepts any alphanumeric character as a digit, for
    /// grammars that write base 16 or 36 digits as letters.
    pub fn with_non_decimal_digits() -> Self {
        SyntaxBuilder {
            syntax: Syntax::empty(),
            non_decimal_digits: true,
        }
    }

    pub fn register_whitespace(mut self, c: char) -> Result<Self, Error> {
        if !c.is_whitespace() {
            return Err(Error::ill_formed(ErrorImpl::CharNotWhitespace {
                character: c,
            }));
        }

        self.syntax.whitespace.insert(c);
        Ok(self)
    }

    pub fn register_punctuator(mut self, c: char) -> Result<Self, Error> {
        if c.is_whitespace() || c.is_alphabetic() || c.is_numeric() {
            return Err(Error::ill_formed(ErrorImpl::CharNotPunctuator {
                character: c,
            }));
        }

        self.syntax.punctuators.insert(c);
        Ok(self)
    }

    pub fn register_letter(mut self, c: char) -> Result<Self, Error> {
        if !c.is_alphabetic() {
            return Err(Error::ill_formed(ErrorImpl::CharNotLetter { character: c }));
        }

        self.syntax.letters.insert(c);
        Ok(self)
    }

    pub fn register_digit(mut self, c: char) -> Result<Self, Error> {
        let valid = if self.non_decimal_digits {
            c.is_alphanumeric()
        } else {
            c.is_ascii_digit()
        };

        if !valid {
            return Err(Error::ill_formed(ErrorImpl::CharNotDigit { character: c }));
        }

        self.syntax.digits.insert(c);
        Ok(self)
    }

    pub fn register_keyword(mut self, keyword: &str) -> Result<Self, Error> {
        self.syntax.keywords.insert(keyword.to_string());
        Ok(self)
    }

    pub fn register_whitespaces(self, chars: &str) -> Result<Self, Error> {
        chars.chars().try_fold(self, Self::register_whitespace)
    }

    pub fn register_punctuators(self, chars: &str) -> Result<Self, Error> {
        chars.chars().try_fold(self, Self::register_punctuator)
    }

    pub fn register_letters(self, chars: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        chars.into_iter().try_fold(self, Self::register_letter)
    }

    pub fn register_digits(self, chars: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        chars.into_iter().try_fold(self, Self::register_digit)
    }

    pub fn register_type(mut self, kind: Type) -> Result<Self, Error> {
        self.syntax.types.insert(kind);
        Ok(self)
    }

    pub fn register_types(self, kinds: impl IntoIterator<Item = Type>) -> Result<Self, Error> {
        kinds.into_iter().try_fold(self, Self::register_type)
    }

    pub fn register_prefix_handler(
        mut self,
        kind: Type,
        handler: PrefixHandler<E, P>,
    ) -> Result<Self, Error> {
        self.check_type(&kind)?;
        self.syntax.prefix_lookup.insert(kind, handler);
        Ok(self)
    }

    pub fn register_infix_handler(
        mut self,
        kind: Type,
        handler: InfixHandler<E, P>,
    ) -> Result<Self, Error> {
        self.check_type(&kind)?;
        self.syntax.infix_lookup.insert(kind, handler);
        Ok(self)
    }

    pub fn register_function_delimiters(mut self, pair: &[char]) -> Result<Self, Error> {
        let pair = self.check_pair(self.syntax.function_delimiters, "function delimiters", pair)?;
        self.syntax.function_delimiters = Some(pair);
        Ok(self)
    }

    pub fn register_grouping(mut self, pair: &[char]) -> Result<Self, Error> {
        let pair = self.check_pair(self.syntax.grouping, "grouping delimiters", pair)?;
        self.syntax.grouping = Some(pair);
        Ok(self)
    }

    pub fn register_array_delimiters(mut self, pair: &[char]) -> Result<Self, Error> {
        let pair = self.check_pair(self.syntax.array_delimiters, "array delimiters", pair)?;
        self.syntax.array_delimiters = Some(pair);
        Ok(self)
    }

    pub fn register_argument_separator(mut self, c: char) -> Result<Self, Error> {
        if self.syntax.argument_separator.is_some() {
            return Err(Error::ill_formed(ErrorImpl::FieldAlreadySet {
                field: "argument separator",
            }));
        }
        self.check_punctuator(c)?;

        self.syntax.argument_separator = Some(c);
        Ok(self)
    }

    pub fn register_name_type(mut self, kind: Type) -> Result<Self, Error> {
        if self.syntax.name_type.is_some() {
            return Err(Error::ill_formed(ErrorImpl::FieldAlreadySet {
                field: "name type",
            }));
        }
        self.check_type(&kind)?;

        self.syntax.name_type = Some(kind);
        Ok(self)
    }

    pub fn build(self) -> Syntax<E, P> {
        debug!(
            "built syntax with {} types, {} prefix and {} infix handlers",
            self.syntax.types.len(),
            self.syntax.prefix_lookup.len(),
            self.syntax.infix_lookup.len()
        );

        self.syntax
    }

    fn check_type(&self, kind: &Type) -> Result<(), Error> {
        if !self.syntax.is_valid_type(kind) {
            return Err(Error::ill_formed(ErrorImpl::UnknownType {
                type_: format!("{:?}", kind),
            }));
        }

        Ok(())
    }

    fn check_punctuator(&self, c: char) -> Result<(), Error> {
        if !self.syntax.is_punctuator(c) {
            return Err(Error::ill_formed(ErrorImpl::UnregisteredDelimiter {
                character: c,
            }));
        }

        Ok(())
    }

    fn check_pair(
        &self,
        current: Option<(char, char)>,
        field: &'static str,
        pair: &[char],
    ) -> Result<(char, char), Error> {
        if current.is_some() {
            return Err(Error::ill_formed(ErrorImpl::FieldAlreadySet { field }));
        }

        match pair {
            [open, close] => {
                self.check_punctuator(*open)?;
                self.check_punctuator(*close)?;
                Ok((*open, *close))
            }
            _ => Err(Error::ill_formed(ErrorImpl::DelimiterCount {
                received: pair.len(),
            })),
        }
    }
}

impl<E, P> Debug for SyntaxBuilder<E, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxBuilder")
            .field("syntax", &self.syntax)
            .field("non_decimal_digits", &self.non_decimal_digits)
            .finish()
    }
}
