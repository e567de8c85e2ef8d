use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{
            Token, Type, AND, ASTERISK, BANG, CARET, FORWARD_SLASH, LEFT_BRACE,
            LEFT_BRACKET, LEFT_PARENTHESIS, LEFT_SHIFT, LOGICAL_AND, LOGICAL_OR, MINUS, NAME,
            NEGATION, OR, PERCENT, PERIOD, PLUS, PROGRAMMER_TYPES, QUOTE, RIGHT_LAMBDA,
            RIGHT_SHIFT, SCIENTIFIC_TYPES, TILDE,
        },
    },
    syntax::{builder::SyntaxBuilder, syntax::Syntax},
};

use super::{expr::*, parser::PrattParser};

pub type PrefixHandler<E, P> =
    fn(&mut PrattParser, Token, &mut dyn Lexer, &Syntax<E, P>, &P) -> Result<E, Error>;
pub type InfixHandler<E, P> =
    fn(&mut PrattParser, E, Token, &mut dyn Lexer, &Syntax<E, P>, &P) -> Result<E, Error>;

// Lookup tables inside the syntax, keyed by token Type
pub type PrefixLookup<E, P> = HashMap<Type, PrefixHandler<E, P>>;
pub type InfixLookup<E, P> = HashMap<Type, InfixHandler<E, P>>;

type Builder = SyntaxBuilder<Expr, ParseParams>;

fn lookup(table: &HashMap<&'static str, Type>, role: &str) -> Result<Type, Error> {
    table.get(role).copied().ok_or_else(|| {
        Error::ill_formed(ErrorImpl::UnknownType {
            type_: role.to_string(),
        })
    })
}

pub fn create_scientific_lookups(builder: Builder) -> Result<Builder, Error> {
    let t = |role: &str| lookup(&SCIENTIFIC_TYPES, role);

    builder
        .register_prefix_handler(NAME, parse_name_expr)?
        .register_prefix_handler(t(LEFT_PARENTHESIS)?, parse_grouping_expr)?
        .register_prefix_handler(t(LEFT_BRACE)?, parse_array_expr)?
        .register_prefix_handler(t(PLUS)?, parse_prefix_expr)?
        .register_prefix_handler(t(MINUS)?, parse_prefix_expr)?
        .register_prefix_handler(t(PERIOD)?, parse_prefix_expr)?
        // Additive and multiplicative
        .register_infix_handler(t(PLUS)?, parse_binary_expr)?
        .register_infix_handler(t(MINUS)?, parse_binary_expr)?
        .register_infix_handler(t(ASTERISK)?, parse_binary_expr)?
        .register_infix_handler(t(FORWARD_SLASH)?, parse_binary_expr)?
        // Right associative
        .register_infix_handler(t(CARET)?, parse_right_binary_expr)?
        .register_infix_handler(t(RIGHT_LAMBDA)?, parse_right_binary_expr)?
        // Postfix
        .register_infix_handler(t(BANG)?, parse_postfix_expr)?
        .register_infix_handler(t(QUOTE)?, parse_postfix_expr)?
        .register_infix_handler(t(LEFT_BRACKET)?, parse_call_expr)
}

pub fn create_programmer_lookups(builder: Builder) -> Result<Builder, Error> {
    let t = |role: &str| lookup(&PROGRAMMER_TYPES, role);

    builder
        .register_prefix_handler(NAME, parse_name_expr)?
        .register_prefix_handler(t(LEFT_PARENTHESIS)?, parse_grouping_expr)?
        .register_prefix_handler(t(LEFT_BRACE)?, parse_array_expr)?
        .register_prefix_handler(t(PLUS)?, parse_prefix_expr)?
        .register_prefix_handler(t(MINUS)?, parse_prefix_expr)?
        .register_prefix_handler(t(PERIOD)?, parse_prefix_expr)?
        // Bit complements
        .register_prefix_handler(t(BANG)?, parse_prefix_expr)?
        .register_prefix_handler(t(TILDE)?, parse_prefix_expr)?
        .register_prefix_handler(t(NEGATION)?, parse_prefix_expr)?
        // Additive and multiplicative
        .register_infix_handler(t(PLUS)?, parse_binary_expr)?
        .register_infix_handler(t(MINUS)?, parse_binary_expr)?
        .register_infix_handler(t(ASTERISK)?, parse_binary_expr)?
        .register_infix_handler(t(FORWARD_SLASH)?, parse_binary_expr)?
        .register_infix_handler(t(PERCENT)?, parse_binary_expr)?
        // Bitwise
        .register_infix_handler(t(OR)?, parse_binary_expr)?
        .register_infix_handler(t(AND)?, parse_binary_expr)?
        .register_infix_handler(t(LOGICAL_OR)?, parse_binary_expr)?
        .register_infix_handler(t(LOGICAL_AND)?, parse_binary_expr)?
        // Right associative
        .register_infix_handler(t(CARET)?, parse_right_binary_expr)?
        .register_infix_handler(t(RIGHT_LAMBDA)?, parse_right_binary_expr)?
        .register_infix_handler(t(LEFT_SHIFT)?, parse_right_binary_expr)?
        .register_infix_handler(t(RIGHT_SHIFT)?, parse_right_binary_expr)?
        // Postfix
        .register_infix_handler(t(QUOTE)?, parse_postfix_expr)?
        .register_infix_handler(t(LEFT_BRACKET)?, parse_call_expr)
}
