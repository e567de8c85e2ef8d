use std::fmt::Display;

use crate::{lexer::tokens::Token, numeral::numeral::Numeral, Position};

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprType {
    Name,
    Number,
    Prefix,
    Operator,
    Postfix,
    Group,
    Function,
    Array,
}

/// Expression tree built by the default parselets.
///
/// `Display` renders a fully bracketed S-expression, so `1-2-3` shows as
/// `(- (- 1 2) 3)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Name(Token),
    Number {
        token: Token,
        value: Numeral,
    },
    Prefix {
        operator: Token,
        operand: Box<Expr>,
    },
    Operator {
        operator: Token,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Postfix {
        operator: Token,
        operand: Box<Expr>,
    },
    Group {
        open: Token,
        inner: Box<Expr>,
    },
    Function {
        function: Box<Expr>,
        open: Token,
        arguments: Vec<Expr>,
    },
    Array {
        open: Token,
        elements: Vec<Expr>,
    },
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Name(_) => ExprType::Name,
            Expr::Number { .. } => ExprType::Number,
            Expr::Prefix { .. } => ExprType::Prefix,
            Expr::Operator { .. } => ExprType::Operator,
            Expr::Postfix { .. } => ExprType::Postfix,
            Expr::Group { .. } => ExprType::Group,
            Expr::Function { .. } => ExprType::Function,
            Expr::Array { .. } => ExprType::Array,
        }
    }

    /// Where the expression starts in the source.
    pub fn get_position(&self) -> Position {
        match self {
            Expr::Name(token) | Expr::Number { token, .. } => token.position,
            Expr::Prefix { operator, .. } => operator.position,
            Expr::Operator { left, .. } => left.get_position(),
            Expr::Postfix { operand, .. } => operand.get_position(),
            Expr::Group { open, .. } | Expr::Array { open, .. } => open.position,
            Expr::Function { function, .. } => function.get_position(),
        }
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, head: &str, items: &[Expr]) -> std::fmt::Result {
    write!(f, "({}", head)?;
    for item in items {
        write!(f, " {}", item)?;
    }
    write!(f, ")")
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Name(token) | Expr::Number { token, .. } => write!(f, "{}", token.lexeme),
            Expr::Prefix { operator, operand } => write!(f, "({} {})", operator.lexeme, operand),
            Expr::Operator {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Postfix { operator, operand } => {
                write!(f, "(postfix {} {})", operator.lexeme, operand)
            }
            Expr::Group { inner, .. } => write!(f, "(group {})", inner),
            Expr::Function {
                function,
                arguments,
                ..
            } => write_list(f, &format!("call {}", function), arguments),
            Expr::Array { elements, .. } => write_list(f, "array", elements),
        }
    }
}

/// Context handed untouched by the parser to every parselet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseParams {
    /// Radix numerals without a suffix are read in.
    pub radix: u32,
}

impl Default for ParseParams {
    fn default() -> Self {
        ParseParams { radix: 10 }
    }
}
