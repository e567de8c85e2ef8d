use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Shorthand for errors raised while a grammar is being assembled,
    /// which have no source position.
    pub fn ill_formed(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::CharNotWhitespace { .. }
            | ErrorImpl::CharNotPunctuator { .. }
            | ErrorImpl::CharNotLetter { .. }
            | ErrorImpl::CharNotDigit { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::FieldAlreadySet { .. }
            | ErrorImpl::DelimiterCount { .. }
            | ErrorImpl::UnregisteredDelimiter { .. }
            | ErrorImpl::MissingSyntaxRole { .. } => ErrorKind::IllFormedSyntax,
            ErrorImpl::UnknownToken { .. } => ErrorKind::UnknownToken,
            ErrorImpl::MalformedNumeral { .. } => ErrorKind::MalformedNumeral,
            ErrorImpl::UnparseableToken { .. } => ErrorKind::UnparseableToken,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidRadix { .. }
            | ErrorImpl::InvalidRange { .. } => ErrorKind::Configuration,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::CharNotWhitespace { .. } => "CharNotWhitespace",
            ErrorImpl::CharNotPunctuator { .. } => "CharNotPunctuator",
            ErrorImpl::CharNotLetter { .. } => "CharNotLetter",
            ErrorImpl::CharNotDigit { .. } => "CharNotDigit",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::FieldAlreadySet { .. } => "FieldAlreadySet",
            ErrorImpl::DelimiterCount { .. } => "DelimiterCount",
            ErrorImpl::UnregisteredDelimiter { .. } => "UnregisteredDelimiter",
            ErrorImpl::MissingSyntaxRole { .. } => "MissingSyntaxRole",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::MalformedNumeral { .. } => "MalformedNumeral",
            ErrorImpl::UnparseableToken { .. } => "UnparseableToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidRadix { .. } => "InvalidRadix",
            ErrorImpl::InvalidRange { .. } => "InvalidRange",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::CharNotWhitespace { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot be registered as whitespace",
                character.escape_debug()
            )),
            ErrorImpl::CharNotPunctuator { character } => ErrorTip::Suggestion(format!(
                "`{}` is a letter, digit or whitespace and cannot be a punctuator",
                character.escape_debug()
            )),
            ErrorImpl::CharNotLetter { character } => {
                ErrorTip::Suggestion(format!("`{}` is not alphabetic", character))
            }
            ErrorImpl::CharNotDigit { character } => ErrorTip::Suggestion(format!(
                "`{}` is not a decimal digit, build the syntax with non-decimal digits allowed",
                character
            )),
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Type `{}` must be registered before a handler can be attached to it",
                type_
            )),
            ErrorImpl::FieldAlreadySet { field } => {
                ErrorTip::Suggestion(format!("The {} can only be set once", field))
            }
            ErrorImpl::DelimiterCount { received } => ErrorTip::Suggestion(format!(
                "Expected an open and a close character, received {}",
                received
            )),
            ErrorImpl::UnregisteredDelimiter { character } => ErrorTip::Suggestion(format!(
                "Register `{}` as a punctuator first",
                character
            )),
            ErrorImpl::MissingSyntaxRole { role } => {
                ErrorTip::Suggestion(format!("The syntax does not define a {}", role))
            }
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumeral { numeral, fault } => {
                ErrorTip::Suggestion(format!("Invalid numeral `{}`: {}", numeral, fault))
            }
            ErrorImpl::UnparseableToken { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Unexpected end of input"))
            }
            ErrorImpl::UnparseableToken { token } => ErrorTip::Suggestion(format!(
                "Unable to parse `{}`, is a delimiter unbalanced?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::NumberParseError { token, radix } => ErrorTip::Suggestion(format!(
                "`{}` is not a number in radix {}",
                token, radix
            )),
            ErrorImpl::InvalidRadix { radix } => ErrorTip::Suggestion(format!(
                "Radix {} is outside of the range 2 to 36",
                radix
            )),
            ErrorImpl::InvalidRange { start, end, len } => ErrorTip::Suggestion(format!(
                "Range {}..{} does not fit a source of {} characters",
                start, end, len
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

/// The error categories callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A grammar registration broke a structural rule.
    IllFormedSyntax,
    /// A character matched no character class of the grammar.
    UnknownToken,
    /// A radix or exponent region of a numeral was empty or out of range.
    MalformedNumeral,
    /// A token appeared where no prefix handler accepts it.
    UnparseableToken,
    /// A handler required a specific token and found another.
    UnexpectedToken,
    /// Lexer configuration or parse parameters were rejected.
    Configuration,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{character:?} is not whitespace")]
    CharNotWhitespace { character: char },
    #[error("{character:?} is not a punctuator or delimiter")]
    CharNotPunctuator { character: char },
    #[error("{character:?} is not a letter")]
    CharNotLetter { character: char },
    #[error("{character:?} is not a digit")]
    CharNotDigit { character: char },
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },
    #[error("{field} has already been set")]
    FieldAlreadySet { field: &'static str },
    #[error("expected 2 delimiters, received {received}")]
    DelimiterCount { received: usize },
    #[error("delimiter {character:?} is not a registered punctuator")]
    UnregisteredDelimiter { character: char },
    #[error("missing {role}")]
    MissingSyntaxRole { role: &'static str },
    #[error("the token {token:?} is unknown")]
    UnknownToken { token: char },
    #[error("malformed numeral {numeral:?}: {fault}")]
    MalformedNumeral { numeral: String, fault: NumeralFault },
    #[error("unable to parse {token:?}")]
    UnparseableToken { token: String },
    #[error("unexpected token: expected {expected:?}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("error parsing number {token:?} in radix {radix}")]
    NumberParseError { token: String, radix: u32 },
    #[error("invalid radix {radix}")]
    InvalidRadix { radix: u32 },
    #[error("invalid source range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// What went wrong inside a numeral literal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralFault {
    #[error("not a numeral")]
    NotANumeral,
    #[error("no radix value was found")]
    MissingRadix,
    #[error("radix {radix} is outside of the range 2 to 36")]
    RadixOutOfRange { radix: u32 },
    #[error("digit {digit:?} is not valid in radix {radix}")]
    DigitNotInRadix { digit: char, radix: u32 },
    #[error("no exponent value was found")]
    MissingExponent,
    #[error("exponent does not fit in 64 bits")]
    ExponentOverflow,
}
