//! The two calculator grammars.
//!
//! Both are built fresh on every call so callers (and tests) never share
//! hidden global state; wrap the result in an `Arc` to share it.

use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::Error,
    lexer::tokens::{Type, NAME, PROGRAMMER_TYPES, SCIENTIFIC_TYPES},
    parser::lookups::{create_programmer_lookups, create_scientific_lookups},
};

use super::{builder::SyntaxBuilder, syntax::Syntax};

const WHITESPACE: &str = " \t\r\n";

/// Table Types in a stable order, so prefix resolution of punctuators does
/// not depend on hash order.
fn sorted_types<'a>(types: impl Iterator<Item = &'a Type>) -> Vec<Type> {
    let mut types: Vec<Type> = types.copied().collect();
    types.sort_by_key(|kind| kind.name());
    types
}

pub fn scientific_syntax() -> Result<Syntax<Expr, ParseParams>, Error> {
    let builder = SyntaxBuilder::new()
        .register_whitespaces(WHITESPACE)?
        .register_punctuators("()[]{}.,+-*/^!'>")?
        .register_letters(('A'..='Z').chain('a'..='z'))?
        .register_digits('0'..='9')?
        .register_types(sorted_types(SCIENTIFIC_TYPES.values()))?
        .register_type(NAME)?
        .register_name_type(NAME)?
        .register_grouping(&['(', ')'])?
        .register_function_delimiters(&['[', ']'])?
        .register_array_delimiters(&['{', '}'])?
        .register_argument_separator(',')?;

    Ok(create_scientific_lookups(builder)?.build())
}

pub fn programmer_syntax() -> Result<Syntax<Expr, ParseParams>, Error> {
    let builder = SyntaxBuilder::with_non_decimal_digits()
        .register_whitespaces(WHITESPACE)?
        .register_punctuators("()[]{}.,+-*/^'>~¬∧∨|&%<!")?
        .register_letters('a'..='z')?
        .register_digits(('0'..='9').chain('A'..='Z'))?
        .register_types(sorted_types(PROGRAMMER_TYPES.values()))?
        .register_type(NAME)?
        .register_name_type(NAME)?
        .register_grouping(&['(', ')'])?
        .register_function_delimiters(&['[', ']'])?
        .register_array_delimiters(&['{', '}'])?
        .register_argument_separator(',')?;

    Ok(create_programmer_lookups(builder)?.build())
}
