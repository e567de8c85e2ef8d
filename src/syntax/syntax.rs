use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
};

use indexmap::IndexSet;

use crate::{
    lexer::tokens::Type,
    parser::lookups::{InfixHandler, InfixLookup, PrefixHandler, PrefixLookup},
};

/// The alphabet and handler tables of one grammar.
///
/// A `Syntax` is only obtainable from [`SyntaxBuilder::build`], which checks
/// every registration as it happens. It is read-only afterwards and can be
/// shared between any number of lexers and parsers.
///
/// [`SyntaxBuilder::build`]: super::builder::SyntaxBuilder::build
pub struct Syntax<E, P> {
    pub(super) whitespace: HashSet<char>,
    pub(super) punctuators: HashSet<char>,
    pub(super) letters: HashSet<char>,
    pub(super) digits: HashSet<char>,
    pub(super) keywords: HashSet<String>,
    pub(super) types: IndexSet<Type>,
    pub(super) prefix_lookup: PrefixLookup<E, P>,
    pub(super) infix_lookup: InfixLookup<E, P>,
    pub(super) grouping: Option<(char, char)>,
    pub(super) function_delimiters: Option<(char, char)>,
    pub(super) array_delimiters: Option<(char, char)>,
    pub(super) argument_separator: Option<char>,
    pub(super) name_type: Option<Type>,
}

impl<E, P> Syntax<E, P> {
    pub(super) fn empty() -> Self {
        Syntax {
            whitespace: HashSet::new(),
            punctuators: HashSet::new(),
            letters: HashSet::new(),
            digits: HashSet::new(),
            keywords: HashSet::new(),
            types: IndexSet::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            grouping: None,
            function_delimiters: None,
            array_delimiters: None,
            argument_separator: None,
            name_type: None,
        }
    }

    /// Resolves a punctuator to its Type.
    ///
    /// A Type named by exactly `c` wins. Otherwise the first registered Type
    /// whose name starts with `c` is returned, so a lone `<` resolves to `<<`
    /// when no `<` Type exists. Types with an empty name never match.
    pub fn type_of(&self, c: char) -> Option<Type> {
        let mut prefixed = None;

        for kind in &self.types {
            let mut name = kind.name().chars();
            match (name.next(), name.next()) {
                (Some(first), None) if first == c => return Some(*kind),
                (Some(first), Some(_)) if first == c && prefixed.is_none() => {
                    prefixed = Some(*kind)
                }
                _ => {}
            }
        }

        prefixed
    }

    /// The registered Type named exactly `name`, if any.
    pub fn type_named(&self, name: &str) -> Option<Type> {
        if name.is_empty() {
            return None;
        }

        self.types.iter().find(|kind| kind.name() == name).copied()
    }

    pub fn prefix_handler(&self, kind: &Type) -> Option<PrefixHandler<E, P>> {
        self.prefix_lookup.get(kind).copied()
    }

    pub fn infix_handler(&self, kind: &Type) -> Option<InfixHandler<E, P>> {
        self.infix_lookup.get(kind).copied()
    }

    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }

    pub fn is_punctuator(&self, c: char) -> bool {
        self.punctuators.contains(&c)
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn is_digit(&self, c: char) -> bool {
        self.digits.contains(&c)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_valid_type(&self, kind: &Type) -> bool {
        self.types.contains(kind)
    }

    pub fn whitespace(&self) -> &HashSet<char> {
        &self.whitespace
    }

    pub fn punctuators(&self) -> &HashSet<char> {
        &self.punctuators
    }

    pub fn letters(&self) -> &HashSet<char> {
        &self.letters
    }

    pub fn digits(&self) -> &HashSet<char> {
        &self.digits
    }

    pub fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    /// Valid Types in registration order.
    pub fn types(&self) -> &IndexSet<Type> {
        &self.types
    }

    pub fn prefix_types(&self) -> impl Iterator<Item = &Type> {
        self.prefix_lookup.keys()
    }

    pub fn infix_types(&self) -> impl Iterator<Item = &Type> {
        self.infix_lookup.keys()
    }

    /// The precedence-director pair, usually `(` and `)`.
    pub fn grouping(&self) -> Option<(char, char)> {
        self.grouping
    }

    pub fn function_delimiters(&self) -> Option<(char, char)> {
        self.function_delimiters
    }

    pub fn array_delimiters(&self) -> Option<(char, char)> {
        self.array_delimiters
    }

    pub fn argument_separator(&self) -> Option<char> {
        self.argument_separator
    }

    /// The Type lexers give names and numerals.
    pub fn name_type(&self) -> Option<Type> {
        self.name_type
    }
}

impl<E, P> Debug for Syntax<E, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Syntax")
            .field("whitespace", &self.whitespace)
            .field("punctuators", &self.punctuators)
            .field("letters", &self.letters)
            .field("digits", &self.digits)
            .field("keywords", &self.keywords)
            .field("types", &self.types)
            .field("prefix_types", &self.prefix_lookup.keys().collect::<Vec<_>>())
            .field("infix_types", &self.infix_lookup.keys().collect::<Vec<_>>())
            .field("grouping", &self.grouping)
            .field("function_delimiters", &self.function_delimiters)
            .field("array_delimiters", &self.array_delimiters)
            .field("argument_separator", &self.argument_separator)
            .field("name_type", &self.name_type)
            .finish()
    }
}
