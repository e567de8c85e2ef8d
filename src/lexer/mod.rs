//! Lexical analysis for the calculator grammars.
//!
//! This module turns source text into tokens under a configurable
//! [`Syntax`](crate::syntax::syntax::Syntax). It contains:
//!
//! - The token model: `Precedence`, `Type` and `Token`
//! - The `Lexer` trait and `LexerConfig`
//! - `ProgrammerLexer` for multi-radix programmer input
//! - `ScientificLexer` for decimal scientific input
//!
//! Lexers never run dry: past the end of the source they keep producing the
//! end-of-stream token.

pub mod lexer;
pub mod programmer;
pub mod scientific;
pub mod tokens;
