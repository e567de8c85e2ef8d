use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::Position;

/// Binding power levels, highest binds tightest.
///
/// Levels compare by [`Precedence::strength`] only. `CaretHighest` and
/// `CaretLowest` exist for exponent-like operators that need to sit just
/// above or just below the regular levels; `CaretLowest` deliberately shares
/// its strength with `Infix4`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Precedence {
    CaretHighest,
    Highest,
    Postfix1,
    Postfix2,
    Prefix1,
    Prefix2,
    Infix1,
    Infix2,
    Infix3,
    Infix4,
    Lowest,
    CaretLowest,
}

impl Precedence {
    pub const fn strength(self) -> i32 {
        match self {
            Precedence::CaretHighest => 11,
            Precedence::Highest => 10,
            Precedence::Postfix1 => 8,
            Precedence::Postfix2 => 7,
            Precedence::Prefix1 => 6,
            Precedence::Prefix2 => 5,
            Precedence::Infix1 => 4,
            Precedence::Infix2 => 3,
            Precedence::Infix3 => 2,
            Precedence::Infix4 => 1,
            Precedence::Lowest => 0,
            Precedence::CaretLowest => 1,
        }
    }
}

/// A lexical category: a symbolic name and the precedence it binds with.
///
/// Two types are equal only if both the name and the precedence match, so
/// the end-of-stream type and the name type can both have an empty name.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Type {
    name: &'static str,
    precedence: Precedence,
}

impl Type {
    pub const fn new(name: &'static str, precedence: Precedence) -> Self {
        Type { name, precedence }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The type of the token a lexer yields once its source is exhausted.
pub const EOF: Type = Type::new("", Precedence::Lowest);
/// The type lexers give names and numerals in the default grammars.
pub const NAME: Type = Type::new("", Precedence::Highest);

// Role keys into the type tables
pub const PLUS: &str = "plus";
pub const MINUS: &str = "minus";
pub const ASTERISK: &str = "asterisk";
pub const FORWARD_SLASH: &str = "forwardSlash";
pub const CARET: &str = "caret";
pub const COMMA: &str = "comma";
pub const PERIOD: &str = "period";
pub const LEFT_PARENTHESIS: &str = "leftParenthesis";
pub const RIGHT_PARENTHESIS: &str = "rightParenthesis";
pub const LEFT_BRACKET: &str = "leftBracket";
pub const RIGHT_BRACKET: &str = "rightBracket";
pub const LEFT_BRACE: &str = "leftBrace";
pub const RIGHT_BRACE: &str = "rightBrace";
pub const BANG: &str = "bang";
pub const QUOTE: &str = "quote";
pub const RIGHT_LAMBDA: &str = "rightLambda";
pub const LEFT_SHIFT: &str = "leftShift";
pub const RIGHT_SHIFT: &str = "rightShift";
pub const TILDE: &str = "tilde";
pub const NEGATION: &str = "negation";
pub const LOGICAL_OR: &str = "logicalOr";
pub const LOGICAL_AND: &str = "logicalAnd";
pub const OR: &str = "or";
pub const AND: &str = "and";
pub const PERCENT: &str = "percent";

lazy_static! {
    pub static ref SCIENTIFIC_TYPES: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert(PLUS, Type::new("+", Precedence::Infix3));
        map.insert(MINUS, Type::new("-", Precedence::Infix3));
        map.insert(ASTERISK, Type::new("*", Precedence::Infix2));
        map.insert(FORWARD_SLASH, Type::new("/", Precedence::Infix2));
        map.insert(CARET, Type::new("^", Precedence::Infix1));
        map.insert(COMMA, Type::new(",", Precedence::Lowest));
        map.insert(PERIOD, Type::new(".", Precedence::Prefix1));
        map.insert(LEFT_PARENTHESIS, Type::new("(", Precedence::Highest));
        map.insert(RIGHT_PARENTHESIS, Type::new(")", Precedence::Lowest));
        map.insert(LEFT_BRACKET, Type::new("[", Precedence::Highest));
        map.insert(RIGHT_BRACKET, Type::new("]", Precedence::Lowest));
        map.insert(LEFT_BRACE, Type::new("{", Precedence::Highest));
        map.insert(RIGHT_BRACE, Type::new("}", Precedence::Lowest));
        map.insert(BANG, Type::new("!", Precedence::Postfix1));
        map.insert(QUOTE, Type::new("'", Precedence::Postfix2));
        map.insert(RIGHT_LAMBDA, Type::new("->", Precedence::Infix4));
        map
    };

    pub static ref PROGRAMMER_TYPES: HashMap<&'static str, Type> = {
        let mut map = HashMap::new();
        map.insert(PLUS, Type::new("+", Precedence::Infix3));
        map.insert(MINUS, Type::new("-", Precedence::Infix3));
        map.insert(ASTERISK, Type::new("*", Precedence::Infix2));
        map.insert(FORWARD_SLASH, Type::new("/", Precedence::Infix2));
        map.insert(PERCENT, Type::new("%", Precedence::Infix2));
        map.insert(CARET, Type::new("^", Precedence::Infix1));
        map.insert(COMMA, Type::new(",", Precedence::Lowest));
        map.insert(PERIOD, Type::new(".", Precedence::Prefix1));
        map.insert(LEFT_PARENTHESIS, Type::new("(", Precedence::Highest));
        map.insert(RIGHT_PARENTHESIS, Type::new(")", Precedence::Lowest));
        map.insert(LEFT_BRACKET, Type::new("[", Precedence::Highest));
        map.insert(RIGHT_BRACKET, Type::new("]", Precedence::Lowest));
        map.insert(LEFT_BRACE, Type::new("{", Precedence::Highest));
        map.insert(RIGHT_BRACE, Type::new("}", Precedence::Lowest));
        map.insert(QUOTE, Type::new("'", Precedence::Postfix2));
        map.insert(RIGHT_LAMBDA, Type::new("->", Precedence::Infix4));
        // shifts
        map.insert(LEFT_SHIFT, Type::new("<<", Precedence::CaretLowest));
        map.insert(RIGHT_SHIFT, Type::new(">>", Precedence::CaretLowest));
        // bit operators
        map.insert(BANG, Type::new("!", Precedence::Prefix1));
        map.insert(TILDE, Type::new("~", Precedence::Prefix1));
        map.insert(NEGATION, Type::new("¬", Precedence::Prefix1));
        map.insert(LOGICAL_OR, Type::new("\u{2228}", Precedence::Infix1));
        map.insert(OR, Type::new("|", Precedence::Infix1));
        map.insert(LOGICAL_AND, Type::new("\u{2227}", Precedence::Infix2));
        map.insert(AND, Type::new("&", Precedence::Infix2));
        map
    };
}

/// A lexeme together with its Type.
///
/// Equality and hashing cover the type and lexeme only; the position is
/// carried for diagnostics.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: Type,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: Type, lexeme: String, position: Position) -> Self {
        Token {
            kind,
            lexeme,
            position,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == EOF
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.lexeme.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.lexeme,
            self.kind,
            self.kind.precedence().strength()
        )
    }
}
