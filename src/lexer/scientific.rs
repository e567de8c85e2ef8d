use std::sync::Arc;

use log::trace;

use crate::{
    ast::ast::{Expr, ParseParams},
    errors::errors::Error,
    syntax::{grammars::scientific_syntax, syntax::Syntax},
    MK_EOF_TOKEN,
};

use super::{
    lexer::{Lexer, LexerConfig, LexerCore, NumeralRules},
    tokens::{Token, RIGHT_LAMBDA, SCIENTIFIC_TYPES},
};

const RULES: NumeralRules = NumeralRules {
    markers: &['e'],
    signed_markers: &['E'],
};

/// Lexer for scientific mode: decimal digits, names made of letters of
/// either case, and `->` as the only two character symbol.
pub struct ScientificLexer<E, P> {
    core: LexerCore<E, P>,
}

impl<E, P> ScientificLexer<E, P> {
    pub fn new(
        source: &str,
        syntax: Arc<Syntax<E, P>>,
        config: LexerConfig,
    ) -> Result<Self, Error> {
        Ok(ScientificLexer {
            core: LexerCore::new(source, syntax, config)?,
        })
    }

    pub fn radix(&self) -> u32 {
        self.core.radix
    }

    pub fn syntax(&self) -> &Arc<Syntax<E, P>> {
        &self.core.syntax
    }
}

impl ScientificLexer<Expr, ParseParams> {
    /// A lexer over the default scientific grammar.
    pub fn with_default_syntax(source: &str) -> Result<Self, Error> {
        let syntax = Arc::new(scientific_syntax()?);
        Self::new(source, syntax, LexerConfig::default())
    }
}

impl<E, P> Lexer for ScientificLexer<E, P> {
    fn next_token(&mut self) -> Result<Token, Error> {
        let core = &mut self.core;
        core.skip_whitespace();

        let Some(c) = core.at() else {
            return Ok(MK_EOF_TOKEN!(core.pos));
        };

        let token = if core.syntax.is_punctuator(c) {
            let syntax = Arc::clone(&core.syntax);
            core.lex_symbol(|pair| {
                let lambda = SCIENTIFIC_TYPES.get(RIGHT_LAMBDA)?;
                if pair == lambda.name() {
                    syntax.type_named(pair)
                } else {
                    None
                }
            })?
        } else if core.syntax.is_letter(c) {
            core.lex_name()
        } else if core.syntax.is_digit(c) {
            core.lex_numeral(&RULES)?
        } else {
            return Err(core.unknown_token(c));
        };

        trace!("scientific token {}", token);
        Ok(token)
    }

    fn source(&self) -> String {
        self.core.source()
    }

    fn set_source(&mut self, source: &str) {
        self.core.set_source(source);
    }
}

impl<E, P> Iterator for ScientificLexer<E, P> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}
