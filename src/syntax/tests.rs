//! Unit tests for the syntax registry and builder.

use super::{
    builder::SyntaxBuilder,
    grammars::{programmer_syntax, scientific_syntax},
    syntax::Syntax,
};
use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{
        lexer::Lexer,
        tokens::{
            Precedence, Token, Type, CARET, LEFT_SHIFT, NAME, PLUS, PROGRAMMER_TYPES,
            SCIENTIFIC_TYPES,
        },
    },
    parser::{expr::parse_name_expr, parser::PrattParser},
};

type Builder = SyntaxBuilder<Expr, ParseParams>;

const PLUS_TYPE: Type = Type::new("+", Precedence::Infix3);

fn dummy_infix(
    _parser: &mut PrattParser,
    left: Expr,
    _token: Token,
    _lexer: &mut dyn Lexer,
    _syntax: &Syntax<Expr, ParseParams>,
    _params: &ParseParams,
) -> Result<Expr, Error> {
    Ok(left)
}

fn ill_formed(result: Result<Builder, Error>) -> ErrorImpl {
    let error = result.err().unwrap();
    assert_eq!(error.get_error_kind(), ErrorKind::IllFormedSyntax);
    error.get_error().clone()
}

#[test]
fn test_register_character_classes() {
    let syntax = Builder::new()
        .register_whitespace(' ')
        .and_then(|b| b.register_punctuator('+'))
        .and_then(|b| b.register_letter('x'))
        .and_then(|b| b.register_digit('7'))
        .and_then(|b| b.register_keyword("let"))
        .unwrap()
        .build();

    assert!(syntax.is_whitespace(' '));
    assert!(syntax.is_punctuator('+'));
    assert!(syntax.is_letter('x'));
    assert!(syntax.is_digit('7'));
    assert!(syntax.is_keyword("let"));
    assert!(!syntax.is_letter('7'));
}

#[test]
fn test_character_class_validation() {
    assert_eq!(
        ill_formed(Builder::new().register_whitespace('a')),
        ErrorImpl::CharNotWhitespace { character: 'a' }
    );
    assert_eq!(
        ill_formed(Builder::new().register_punctuator('a')),
        ErrorImpl::CharNotPunctuator { character: 'a' }
    );
    assert_eq!(
        ill_formed(Builder::new().register_punctuator('1')),
        ErrorImpl::CharNotPunctuator { character: '1' }
    );
    assert_eq!(
        ill_formed(Builder::new().register_punctuator(' ')),
        ErrorImpl::CharNotPunctuator { character: ' ' }
    );
    assert_eq!(
        ill_formed(Builder::new().register_letter('+')),
        ErrorImpl::CharNotLetter { character: '+' }
    );
    assert_eq!(
        ill_formed(Builder::new().register_digit('A')),
        ErrorImpl::CharNotDigit { character: 'A' }
    );
}

#[test]
fn test_non_decimal_digits() {
    let syntax = Builder::with_non_decimal_digits()
        .register_digits(('0'..='9').chain('A'..='F'))
        .unwrap()
        .build();

    assert!(syntax.is_digit('F'));
    assert_eq!(syntax.digits().len(), 16);
    assert!(Builder::with_non_decimal_digits().register_digit('+').is_err());
}

#[test]
fn test_handler_needs_registered_type() {
    let error = ill_formed(Builder::new().register_infix_handler(PLUS_TYPE, dummy_infix));
    assert!(matches!(error, ErrorImpl::UnknownType { .. }));

    let error = ill_formed(Builder::new().register_prefix_handler(NAME, parse_name_expr));
    assert!(matches!(error, ErrorImpl::UnknownType { .. }));

    let syntax = Builder::new()
        .register_type(PLUS_TYPE)
        .and_then(|b| b.register_infix_handler(PLUS_TYPE, dummy_infix))
        .unwrap()
        .build();
    assert!(syntax.infix_handler(&PLUS_TYPE).is_some());
    assert!(syntax.prefix_handler(&PLUS_TYPE).is_none());
}

#[test]
fn test_function_delimiters_are_write_once() {
    let builder = Builder::new()
        .register_punctuators("[]")
        .and_then(|b| b.register_function_delimiters(&['[', ']']))
        .unwrap();

    assert_eq!(
        ill_formed(builder.register_function_delimiters(&['[', ']'])),
        ErrorImpl::FieldAlreadySet {
            field: "function delimiters"
        }
    );
}

#[test]
fn test_delimiter_pairs_are_validated() {
    let builder = || Builder::new().register_punctuators("()").unwrap();

    assert_eq!(
        ill_formed(builder().register_grouping(&['('])),
        ErrorImpl::DelimiterCount { received: 1 }
    );
    assert_eq!(
        ill_formed(builder().register_array_delimiters(&['(', ')', ')'])),
        ErrorImpl::DelimiterCount { received: 3 }
    );
    assert_eq!(
        ill_formed(builder().register_grouping(&['(', ']'])),
        ErrorImpl::UnregisteredDelimiter { character: ']' }
    );

    let syntax = builder().register_grouping(&['(', ')']).unwrap().build();
    assert_eq!(syntax.grouping(), Some(('(', ')')));
    assert_eq!(syntax.function_delimiters(), None);
}

#[test]
fn test_argument_separator() {
    assert_eq!(
        ill_formed(Builder::new().register_argument_separator(',')),
        ErrorImpl::UnregisteredDelimiter { character: ',' }
    );

    let builder = Builder::new()
        .register_punctuator(',')
        .and_then(|b| b.register_argument_separator(','))
        .unwrap();
    assert_eq!(
        ill_formed(builder.register_argument_separator(',')),
        ErrorImpl::FieldAlreadySet {
            field: "argument separator"
        }
    );
}

#[test]
fn test_name_type() {
    assert!(matches!(
        ill_formed(Builder::new().register_name_type(NAME)),
        ErrorImpl::UnknownType { .. }
    ));

    let builder = Builder::new()
        .register_type(NAME)
        .and_then(|b| b.register_name_type(NAME))
        .unwrap();
    assert_eq!(
        ill_formed(builder.register_name_type(NAME)),
        ErrorImpl::FieldAlreadySet { field: "name type" }
    );
}

#[test]
fn test_type_of() {
    let syntax = programmer_syntax().unwrap();

    assert_eq!(syntax.type_of('+'), Some(PROGRAMMER_TYPES[PLUS]));
    assert_eq!(syntax.type_of('<'), Some(PROGRAMMER_TYPES[LEFT_SHIFT]));
    assert_eq!(syntax.type_of('?'), None);
    // the empty named name type never matches
    assert_eq!(syntax.type_of('x'), None);
}

#[test]
fn test_type_named() {
    let syntax = scientific_syntax().unwrap();

    assert_eq!(syntax.type_named("^"), Some(SCIENTIFIC_TYPES[CARET]));
    assert!(syntax.type_named("->").is_some());
    assert_eq!(syntax.type_named("<<"), None);
    assert_eq!(syntax.type_named(""), None);
}

#[test]
fn test_types_keep_registration_order() {
    let first = Type::new("b", Precedence::Lowest);
    let second = Type::new("a", Precedence::Lowest);
    let syntax = Builder::new()
        .register_types([first, second, first])
        .unwrap()
        .build();

    let types: Vec<Type> = syntax.types().iter().copied().collect();
    assert_eq!(types, vec![first, second]);
}

#[test]
fn test_default_grammars_register_only_valid_types() {
    let scientific = scientific_syntax().unwrap();
    for kind in scientific.prefix_types().chain(scientific.infix_types()) {
        assert!(scientific.is_valid_type(kind), "{:?}", kind);
    }

    let programmer = programmer_syntax().unwrap();
    for kind in programmer.prefix_types().chain(programmer.infix_types()) {
        assert!(programmer.is_valid_type(kind), "{:?}", kind);
    }
}

#[test]
fn test_default_grammar_roles() {
    let scientific = scientific_syntax().unwrap();

    assert_eq!(scientific.grouping(), Some(('(', ')')));
    assert_eq!(scientific.function_delimiters(), Some(('[', ']')));
    assert_eq!(scientific.array_delimiters(), Some(('{', '}')));
    assert_eq!(scientific.argument_separator(), Some(','));
    assert_eq!(scientific.name_type(), Some(NAME));
    assert!(scientific.is_letter('E'));
    assert!(!scientific.is_digit('E'));

    let programmer = programmer_syntax().unwrap();
    assert!(programmer.is_digit('E'));
    assert!(!programmer.is_letter('E'));
    assert!(programmer.is_letter('e'));
}

#[test]
fn test_grammars_are_independent() {
    let a = scientific_syntax().unwrap();
    let b = scientific_syntax().unwrap();

    assert_eq!(a.types(), b.types());
}
