//! Unit tests for the parser module.
//!
//! This module contains tests for parsing expressions including:
//! - Operator precedence and associativity
//! - Prefix, postfix, grouping, call and array parselets
//! - The consume, match and reset helpers
//! - Custom grammars and parameter pass-through
//! - Error cases

use std::sync::Arc;

use super::{
    expr::{parse_name_expr, parse_postfix_expr, parse_right_binary_expr},
    parser::PrattParser,
};
use crate::{
    ast::ast::{Expr, ExprType, ParseParams},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{
        lexer::{Lexer, LexerConfig},
        programmer::ProgrammerLexer,
        scientific::ScientificLexer,
        tokens::{Precedence, Token, Type, EOF, NAME},
    },
    syntax::{
        builder::SyntaxBuilder,
        grammars::{programmer_syntax, scientific_syntax},
        syntax::Syntax,
    },
};

fn parse_scientific(source: &str) -> Result<Expr, Error> {
    let syntax = Arc::new(scientific_syntax().unwrap());
    let mut lexer = ScientificLexer::new(source, Arc::clone(&syntax), LexerConfig::default())?;
    PrattParser::new().parse(&mut lexer, &syntax, &ParseParams::default())
}

fn parse_programmer(source: &str, radix: u32) -> Result<Expr, Error> {
    let syntax = Arc::new(programmer_syntax().unwrap());
    let config = LexerConfig::default().with_radix(radix);
    let mut lexer = ProgrammerLexer::new(source, Arc::clone(&syntax), config)?;
    PrattParser::new().parse(&mut lexer, &syntax, &ParseParams { radix })
}

fn render(source: &str) -> String {
    parse_scientific(source).unwrap().to_string()
}

fn error_of(result: Result<Expr, Error>) -> Error {
    match result {
        Ok(expr) => panic!("Expected an error, parsed {}", expr),
        Err(error) => error,
    }
}

#[test]
fn test_parse_name_and_number() {
    let expr = parse_scientific("x").unwrap();
    assert_eq!(expr.get_expr_type(), ExprType::Name);

    let expr = parse_scientific("2.5").unwrap();
    assert_eq!(expr.get_expr_type(), ExprType::Number);
    match expr {
        Expr::Number { value, .. } => assert_eq!(value.to_f64(), 2.5),
        _ => panic!("Expected a number"),
    }
}

#[test]
fn test_left_associativity() {
    assert_eq!(render("1-2-3"), "(- (- 1 2) 3)");
    assert_eq!(render("8/4/2"), "(/ (/ 8 4) 2)");
}

#[test]
fn test_operator_precedence() {
    assert_eq!(render("1+2*3"), "(+ 1 (* 2 3))");
    assert_eq!(render("1*2+3"), "(+ (* 1 2) 3)");
    assert_eq!(render("2*3^2"), "(* 2 (^ 3 2))");
}

#[test]
fn test_right_associativity() {
    assert_eq!(render("2^3^2"), "(^ 2 (^ 3 2))");
}

#[test]
fn test_grouping() {
    assert_eq!(render("(2+5)*3"), "(* (group (+ 2 5)) 3)");
    assert_eq!(render("2+5*3"), "(+ 2 (* 5 3))");
    assert_eq!(render("((1))"), "(group (group 1))");
}

#[test]
fn test_prefix_operators() {
    assert_eq!(render("-2^2"), "(- (^ 2 2))");
    assert_eq!(render("-2+3"), "(+ (- 2) 3)");
    assert_eq!(render("2*-3"), "(* 2 (- 3))");
    assert_eq!(render("--1"), "(- (- 1))");
}

#[test]
fn test_postfix_operators() {
    assert_eq!(render("3!"), "(postfix ! 3)");
    assert_eq!(render("2^3!"), "(^ 2 (postfix ! 3))");
    assert_eq!(render("f'"), "(postfix ' f)");
    assert_eq!(render("3!!"), "(postfix ! (postfix ! 3))");
}

#[test]
fn test_function_calls() {
    assert_eq!(render("sin[x]"), "(call sin x)");
    assert_eq!(render("max[1, 2+3]"), "(call max 1 (+ 2 3))");
    assert_eq!(render("rand[]"), "(call rand)");
    assert_eq!(render("2*sin[x]^2"), "(* 2 (^ (call sin x) 2))");
}

#[test]
fn test_arrays() {
    assert_eq!(render("{1, 2, 3}"), "(array 1 2 3)");
    assert_eq!(render("{}"), "(array)");
    assert_eq!(render("{{1}, x}"), "(array (array 1) x)");
}

#[test]
fn test_lambda() {
    assert_eq!(render("x -> x + 1"), "(-> x (+ x 1))");
    assert_eq!(render("x -> y -> x"), "(-> x (-> y x))");
}

#[test]
fn test_expression_positions() {
    assert_eq!(parse_scientific("  x").unwrap().get_position().0, 2);
    assert_eq!(parse_scientific("a + b").unwrap().get_position().0, 0);
    assert_eq!(parse_scientific(" (1)").unwrap().get_position().0, 1);
    assert_eq!(parse_scientific("1 + -f[2]").unwrap().get_position().0, 0);
}

#[test]
fn test_whitespace_does_not_change_the_tree() {
    let tight = parse_scientific("(2+5)*3").unwrap();
    let spaced = parse_scientific("  ( 2 + 5 )\t*\n3 ").unwrap();

    assert_eq!(tight, spaced);
}

#[test]
fn test_unbalanced_close_is_rejected() {
    let error = error_of(parse_scientific("3*2+6)"));

    assert_eq!(error.get_error_kind(), ErrorKind::UnparseableToken);
    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnparseableToken {
            token: ")".to_string()
        }
    );
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_unclosed_group_is_rejected() {
    let error = error_of(parse_scientific("(1+2"));

    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "".to_string()
        }
    );
}

#[test]
fn test_missing_separator_is_rejected() {
    let error = error_of(parse_scientific("sin[1 2]"));

    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnexpectedToken {
            expected: "]".to_string(),
            found: "2".to_string()
        }
    );
}

#[test]
fn test_infix_in_prefix_position() {
    let error = error_of(parse_scientific("*3"));
    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnparseableToken {
            token: "*".to_string()
        }
    );

    let error = error_of(parse_scientific(""));
    assert_eq!(error.get_tip().to_string(), "Unexpected end of input");
}

#[test]
fn test_lexer_errors_surface() {
    let error = error_of(parse_scientific("1 + $"));
    assert_eq!(error.get_error_kind(), ErrorKind::UnknownToken);
}

#[test]
fn test_programmer_operators() {
    let render = |source| parse_programmer(source, 10).unwrap().to_string();

    assert_eq!(render("1 << 2 + 3"), "(<< 1 (+ 2 3))");
    assert_eq!(render("1 << 2 << 3"), "(<< 1 (<< 2 3))");
    assert_eq!(render("7 % 3"), "(% 7 3)");
    assert_eq!(render("!a"), "(! a)");
    assert_eq!(render("~a | b & c"), "(& (| (~ a) b) c)");
    assert_eq!(render("a ∨ b ∧ c"), "(∧ (∨ a b) c)");
}

#[test]
fn test_programmer_numbers_follow_radix() {
    let error = error_of(parse_programmer("FF", 10));
    assert_eq!(
        *error.get_error(),
        ErrorImpl::NumberParseError {
            token: "FF".to_string(),
            radix: 10
        }
    );

    match parse_programmer("FF", 16).unwrap() {
        Expr::Number { value, .. } => assert_eq!(value.to_f64(), 255.0),
        other => panic!("Expected a number, got {}", other),
    }
}

#[test]
fn test_programmer_numbers_starting_with_marker_digits() {
    let render = |source, radix| parse_programmer(source, radix).unwrap().to_string();

    assert_eq!(render("E+1", 16), "(+ E 1)");
    assert_eq!(render("E-1", 16), "(- E 1)");
    assert_eq!(render("P-2", 36), "(- P 2)");

    match parse_programmer("E", 16).unwrap() {
        Expr::Number { value, .. } => assert_eq!(value.to_f64(), 14.0),
        other => panic!("Expected a number, got {}", other),
    }
}

#[test]
fn test_consume_and_matches() {
    let syntax = scientific_syntax().unwrap();
    let open = syntax.type_of('(').unwrap();
    let close = syntax.type_of(')').unwrap();

    let mut lexer = ScientificLexer::with_default_syntax("( )").unwrap();
    let mut parser = PrattParser::new();

    // a failed match leaves the token in place
    assert!(!parser.matches(&close, &mut lexer).unwrap());

    let error = parser.consume(&close, &mut lexer).unwrap_err();
    assert_eq!(
        *error.get_error(),
        ErrorImpl::UnexpectedToken {
            expected: ")".to_string(),
            found: "(".to_string()
        }
    );

    assert_eq!(parser.consume(&open, &mut lexer).unwrap().lexeme, "(");
    assert!(parser.matches(&close, &mut lexer).unwrap());
    assert!(parser.matches(&EOF, &mut lexer).unwrap());
    assert!(parser.matches(&EOF, &mut lexer).unwrap());
}

#[test]
fn test_reset_clears_lookahead() {
    let syntax = Arc::new(scientific_syntax().unwrap());
    let params = ParseParams::default();
    let mut lexer =
        ScientificLexer::new("1+2", Arc::clone(&syntax), LexerConfig::default()).unwrap();
    let mut parser = PrattParser::new();

    assert_eq!(
        parser.parse(&mut lexer, &syntax, &params).unwrap().to_string(),
        "(+ 1 2)"
    );

    // the end-of-stream token is still buffered
    lexer.set_source("3");
    assert!(parser.parse(&mut lexer, &syntax, &params).is_err());

    lexer.set_source("3");
    parser.reset();
    assert_eq!(
        parser.parse(&mut lexer, &syntax, &params).unwrap().to_string(),
        "3"
    );
}

#[test]
fn test_caret_highest_binds_above_postfix() {
    let caret = Type::new("^", Precedence::CaretHighest);
    let bang = Type::new("!", Precedence::Postfix1);

    let syntax = SyntaxBuilder::<Expr, ParseParams>::new()
        .register_punctuators("^!")
        .and_then(|b| b.register_digits('0'..='9'))
        .and_then(|b| b.register_types([NAME, caret, bang]))
        .and_then(|b| b.register_name_type(NAME))
        .and_then(|b| b.register_prefix_handler(NAME, parse_name_expr))
        .and_then(|b| b.register_infix_handler(caret, parse_right_binary_expr))
        .and_then(|b| b.register_infix_handler(bang, parse_postfix_expr))
        .unwrap()
        .build();
    let syntax = Arc::new(syntax);

    let render = |source: &str| {
        let mut lexer =
            ScientificLexer::new(source, Arc::clone(&syntax), LexerConfig::default()).unwrap();
        PrattParser::new()
            .parse(&mut lexer, &syntax, &ParseParams::default())
            .unwrap()
            .to_string()
    };

    assert_eq!(render("2^3!"), "(postfix ! (^ 2 3))");
    assert_eq!(render("3!^2"), "(^ (postfix ! 3) 2)");
    assert_eq!(render("2^3^2"), "(^ 2 (^ 3 2))");
}

fn tag_name(
    _parser: &mut PrattParser,
    token: Token,
    _lexer: &mut dyn Lexer,
    _syntax: &Syntax<String, String>,
    params: &String,
) -> Result<String, Error> {
    Ok(format!("{}{}", params, token.lexeme))
}

fn join(
    parser: &mut PrattParser,
    left: String,
    token: Token,
    lexer: &mut dyn Lexer,
    syntax: &Syntax<String, String>,
    params: &String,
) -> Result<String, Error> {
    let right = parser.parse_at(token.kind.precedence().strength(), lexer, syntax, params)?;
    Ok(format!("{}{}{}", left, token.lexeme, right))
}

#[test]
fn test_params_reach_handlers_untouched() {
    let plus = Type::new("+", Precedence::Infix3);

    let syntax = SyntaxBuilder::<String, String>::new()
        .register_punctuator('+')
        .and_then(|b| b.register_letters('a'..='z'))
        .and_then(|b| b.register_types([NAME, plus]))
        .and_then(|b| b.register_name_type(NAME))
        .and_then(|b| b.register_prefix_handler(NAME, tag_name))
        .and_then(|b| b.register_infix_handler(plus, join))
        .unwrap()
        .build();
    let syntax = Arc::new(syntax);

    let mut lexer =
        ProgrammerLexer::new("a+b+c", Arc::clone(&syntax), LexerConfig::default()).unwrap();
    let result = PrattParser::new()
        .parse(&mut lexer, &syntax, &"$".to_string())
        .unwrap();

    assert_eq!(result, "$a+$b+$c");
}
