//! Precedence-climbing parser over a pluggable grammar.
//!
//! The parser owns nothing but a lookahead buffer. The handler tables live
//! in the [`Syntax`] and the tokens come from a [`Lexer`], so one parser can
//! drive any grammar:
//!
//! - A token in prefix position is dispatched to its prefix handler
//! - While the next token binds tighter than the current threshold it is
//!   dispatched to its infix handler with the expression built so far
//! - A token without an infix handler binds with strength 0 and ends the
//!   loop, which is how the end-of-stream token stops every parse

use std::collections::VecDeque;

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, Type},
    },
    syntax::syntax::Syntax,
};

/// Parser state between calls: tokens read from the lexer but not yet
/// consumed, oldest first.
#[derive(Debug, Default)]
pub struct PrattParser {
    waiting: VecDeque<Token>,
}

impl PrattParser {
    pub fn new() -> Self {
        PrattParser {
            waiting: VecDeque::new(),
        }
    }

    /// Parses one complete expression.
    ///
    /// Fails with `UnparseableToken` if anything other than the end-of-stream
    /// token follows the expression. The lookahead buffer is left as is, call
    /// [`PrattParser::reset`] before reusing the parser on another source.
    pub fn parse<E, P>(
        &mut self,
        lexer: &mut dyn Lexer,
        syntax: &Syntax<E, P>,
        params: &P,
    ) -> Result<E, Error> {
        debug!("parsing {:?}", lexer.source());

        let expression = self.parse_at(0, lexer, syntax, params)?;

        let next = self.read_and_peek(lexer)?;
        if !next.is_eof() {
            return Err(Error::new(
                ErrorImpl::UnparseableToken {
                    token: next.lexeme.clone(),
                },
                next.position,
            ));
        }

        debug!("parse finished");
        Ok(expression)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `min_precedence`.
    pub fn parse_at<E, P>(
        &mut self,
        min_precedence: i32,
        lexer: &mut dyn Lexer,
        syntax: &Syntax<E, P>,
        params: &P,
    ) -> Result<E, Error> {
        let token = self.read_and_pop(lexer)?;

        let Some(prefix) = syntax.prefix_handler(&token.kind) else {
            return Err(Error::new(
                ErrorImpl::UnparseableToken {
                    token: token.lexeme,
                },
                token.position,
            ));
        };

        trace!("prefix {}", token);
        let mut left = prefix(self, token, lexer, syntax, params)?;

        while min_precedence < self.precedence(lexer, syntax)? {
            let token = self.read_and_pop(lexer)?;

            let Some(infix) = syntax.infix_handler(&token.kind) else {
                return Err(Error::new(
                    ErrorImpl::UnparseableToken {
                        token: token.lexeme,
                    },
                    token.position,
                ));
            };

            trace!("infix {}", token);
            left = infix(self, left, token, lexer, syntax, params)?;
        }

        Ok(left)
    }

    /// Takes the next token, which must be of type `expected`.
    pub fn consume(&mut self, expected: &Type, lexer: &mut dyn Lexer) -> Result<Token, Error> {
        let token = self.read_and_peek(lexer)?;

        if token.kind != *expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected.name().to_string(),
                    found: token.lexeme.clone(),
                },
                token.position,
            ));
        }

        self.read_and_pop(lexer)
    }

    /// Takes the next token only if it is of type `expected`.
    pub fn matches(&mut self, expected: &Type, lexer: &mut dyn Lexer) -> Result<bool, Error> {
        if self.read_and_peek(lexer)?.kind != *expected {
            return Ok(false);
        }

        self.read_and_pop(lexer)?;
        Ok(true)
    }

    /// Drops any buffered lookahead.
    pub fn reset(&mut self) {
        self.waiting.clear();
    }

    fn precedence<E, P>(
        &mut self,
        lexer: &mut dyn Lexer,
        syntax: &Syntax<E, P>,
    ) -> Result<i32, Error> {
        let kind = self.read_and_peek(lexer)?.kind;

        match syntax.infix_handler(&kind) {
            Some(_) => Ok(kind.precedence().strength()),
            None => Ok(0),
        }
    }

    fn fill(&mut self, lexer: &mut dyn Lexer) -> Result<(), Error> {
        if self.waiting.is_empty() {
            let token = lexer.next_token()?;
            self.waiting.push_back(token);
        }

        Ok(())
    }

    fn read_and_peek(&mut self, lexer: &mut dyn Lexer) -> Result<&Token, Error> {
        self.fill(lexer)?;

        self.waiting.front().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnparseableToken {
                    token: String::new(),
                },
                crate::Position::null(),
            )
        })
    }

    fn read_and_pop(&mut self, lexer: &mut dyn Lexer) -> Result<Token, Error> {
        self.fill(lexer)?;

        self.waiting.pop_front().ok_or_else(|| {
            Error::new(
                ErrorImpl::UnparseableToken {
                    token: String::new(),
                },
                crate::Position::null(),
            )
        })
    }
}
