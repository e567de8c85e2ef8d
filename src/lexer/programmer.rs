use std::sync::Arc;

use log::trace;

use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::Error,
    syntax::{grammars::programmer_syntax, syntax::Syntax},
    MK_EOF_TOKEN,
};

use super::{
    lexer::{Lexer, LexerConfig, LexerCore, NumeralRules},
    tokens::Token,
};

const RULES: NumeralRules = NumeralRules {
    markers: &['e', 'p'],
    signed_markers: &['E', 'P'],
};

/// Lexer for programmer mode.
///
/// Upper case letters are digits so numerals can be written in any radix up
/// to 36, lower case letters make up names, and `e` and `p` are reserved as
/// exponent markers. Any two punctuators whose concatenation names a
/// registered Type are read as one symbol, e.g. `<<` and `->`.
pub struct ProgrammerLexer<E, P> {
    core: LexerCore<E, P>,
}

impl<E, P> ProgrammerLexer<E, P> {
    pub fn new(
        source: &str,
        syntax: Arc<Syntax<E, P>>,
        config: LexerConfig,
    ) -> Result<Self, Error> {
        Ok(ProgrammerLexer {
            core: LexerCore::new(source, syntax, config)?,
        })
    }

    pub fn radix(&self) -> u32 {
        self.core.radix
    }

    pub fn set_radix(&mut self, radix: u32) -> Result<(), Error> {
        self.core.set_radix(radix)
    }

    pub fn syntax(&self) -> &Arc<Syntax<E, P>> {
        &self.core.syntax
    }
}

impl ProgrammerLexer<Expr, ParseParams> {
    /// A lexer over the default programmer grammar.
    pub fn with_default_syntax(source: &str, radix: u32) -> Result<Self, Error> {
        let syntax = Arc::new(programmer_syntax()?);
        Self::new(source, syntax, LexerConfig::default().with_radix(radix))
    }
}

impl<E, P> Lexer for ProgrammerLexer<E, P> {
    fn next_token(&mut self) -> Result<Token, Error> {
        let core = &mut self.core;
        core.skip_whitespace();

        let Some(c) = core.at() else {
            return Ok(MK_EOF_TOKEN!(core.pos));
        };

        let token = if core.syntax.is_punctuator(c) {
            let syntax = Arc::clone(&core.syntax);
            core.lex_symbol(|pair| syntax.type_named(pair))?
        } else if RULES.markers.contains(&c) {
            return Err(core.unknown_token(c));
        } else if core.syntax.is_letter(c) {
            core.lex_name()
        } else if core.syntax.is_digit(c) {
            core.lex_numeral(&RULES)?
        } else {
            return Err(core.unknown_token(c));
        };

        trace!("programmer token {}", token);
        Ok(token)
    }

    fn source(&self) -> String {
        self.core.source()
    }

    fn set_source(&mut self, source: &str) {
        self.core.set_source(source);
    }
}

impl<E, P> Iterator for ProgrammerLexer<E, P> {
    type Item = Result<Token, Error>;

    /// Never returns `None`; an exhausted lexer keeps yielding end-of-stream
    /// tokens.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}
