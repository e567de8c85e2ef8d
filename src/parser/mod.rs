//! Parser module for building expression trees.
//!
//! The parser transforms the token stream of a lexer into an expression
//! under a pluggable grammar:
//!
//! - `parser`: the `PrattParser` precedence-climbing driver
//! - `lookups`: handler types and the default grammars' handler tables
//! - `expr`: the default parselets building an `Expr`
//!
//! Handlers are plain function pointers looked up by token Type, with
//! the Type's precedence acting as its binding power.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
