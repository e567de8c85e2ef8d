use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, Type},
    },
    numeral::numeral::Numeral,
    syntax::syntax::Syntax,
};

use super::parser::PrattParser;

type ExprSyntax = Syntax<Expr, ParseParams>;

/// The Type of a structural character, which must be registered.
fn structural_type(
    syntax: &ExprSyntax,
    c: Option<char>,
    role: &'static str,
    token: &Token,
) -> Result<Type, Error> {
    c.and_then(|c| syntax.type_of(c))
        .ok_or_else(|| Error::new(ErrorImpl::MissingSyntaxRole { role }, token.position))
}

/// Names and numerals share a Type; a lexeme that starts with a digit which
/// is not also a letter is a numeral.
pub fn parse_name_expr(
    _parser: &mut PrattParser,
    token: Token,
    _lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let numeric = token
        .lexeme
        .chars()
        .next()
        .is_some_and(|c| syntax.is_digit(c) && !syntax.is_letter(c));

    if !numeric {
        return Ok(Expr::Name(token));
    }

    match Numeral::parse(&token.lexeme, params.radix) {
        Ok(value) => Ok(Expr::Number { token, value }),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.lexeme,
                radix: params.radix,
            },
            token.position,
        )),
    }
}

pub fn parse_grouping_expr(
    parser: &mut PrattParser,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let close = structural_type(
        syntax,
        syntax.grouping().map(|(_, close)| close),
        "grouping delimiters",
        &token,
    )?;

    let inner = parser.parse_at(0, lexer, syntax, params)?;
    parser.consume(&close, lexer)?;

    Ok(Expr::Group {
        open: token,
        inner: Box::new(inner),
    })
}

/// The operand binds at the operator's own precedence, so `-2^2` negates
/// the power while `-2+3` adds to the negation.
pub fn parse_prefix_expr(
    parser: &mut PrattParser,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let precedence = token.kind.precedence().strength();
    let operand = parser.parse_at(precedence, lexer, syntax, params)?;

    Ok(Expr::Prefix {
        operator: token,
        operand: Box::new(operand),
    })
}

pub fn parse_binary_expr(
    parser: &mut PrattParser,
    left: Expr,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let precedence = token.kind.precedence().strength();
    let right = parser.parse_at(precedence, lexer, syntax, params)?;

    Ok(Expr::Operator {
        operator: token,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Like [`parse_binary_expr`] but lets an operator of the same precedence
/// take the right hand side, so `2^3^2` is `2^(3^2)`.
pub fn parse_right_binary_expr(
    parser: &mut PrattParser,
    left: Expr,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let precedence = token.kind.precedence().strength() - 1;
    let right = parser.parse_at(precedence, lexer, syntax, params)?;

    Ok(Expr::Operator {
        operator: token,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_postfix_expr(
    _parser: &mut PrattParser,
    left: Expr,
    token: Token,
    _lexer: &mut dyn Lexer,
    _syntax: &ExprSyntax,
    _params: &ParseParams,
) -> Result<Expr, Error> {
    Ok(Expr::Postfix {
        operator: token,
        operand: Box::new(left),
    })
}

pub fn parse_call_expr(
    parser: &mut PrattParser,
    left: Expr,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let close = structural_type(
        syntax,
        syntax.function_delimiters().map(|(_, close)| close),
        "function delimiters",
        &token,
    )?;

    let arguments = parse_list(parser, &close, lexer, syntax, params, &token)?;

    Ok(Expr::Function {
        function: Box::new(left),
        open: token,
        arguments,
    })
}

pub fn parse_array_expr(
    parser: &mut PrattParser,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
) -> Result<Expr, Error> {
    let close = structural_type(
        syntax,
        syntax.array_delimiters().map(|(_, close)| close),
        "array delimiters",
        &token,
    )?;

    let elements = parse_list(parser, &close, lexer, syntax, params, &token)?;

    Ok(Expr::Array {
        open: token,
        elements,
    })
}

/// Reads separated expressions up to and including `close`. The list may be
/// empty.
fn parse_list(
    parser: &mut PrattParser,
    close: &Type,
    lexer: &mut dyn Lexer,
    syntax: &ExprSyntax,
    params: &ParseParams,
    open: &Token,
) -> Result<Vec<Expr>, Error> {
    let mut items = vec![];

    if parser.matches(close, lexer)? {
        return Ok(items);
    }

    let separator = structural_type(
        syntax,
        syntax.argument_separator(),
        "argument separator",
        open,
    )?;

    loop {
        items.push(parser.parse_at(0, lexer, syntax, params)?);

        if !parser.matches(&separator, lexer)? {
            parser.consume(close, lexer)?;
            return Ok(items);
        }
    }
}
