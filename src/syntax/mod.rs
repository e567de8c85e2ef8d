//! Grammar registry for the parsing engine.
//!
//! A [`Syntax`](syntax::Syntax) holds the alphabet of one grammar (whitespace,
//! punctuators, letters, digits, keywords and Types), the structural
//! delimiters, and the prefix and infix handler tables the parser dispatches
//! through. It is assembled with the write-once
//! [`SyntaxBuilder`](builder::SyntaxBuilder); `grammars` builds the two
//! default calculator grammars.

pub mod builder;
pub mod grammars;
pub mod syntax;

#[cfg(test)]
mod tests;
