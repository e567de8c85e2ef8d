//! Utility macros for the parsing engine.
//!
//! This module defines helper macros used by the lexers:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_EOF_TOKEN!` - Creates the end-of-stream Token at a position
//!
//! These macros reduce boilerplate in the lexer implementations.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The token Type
/// * `$lexeme` - The raw text of the token
/// * `$position` - The character offset the token starts at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(syntax_name_type, "42".to_string(), 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        $crate::lexer::tokens::Token::new($kind, $lexeme, $crate::Position($position as u32))
    };
}

/// Creates the end-of-stream Token every lexer yields once its source is
/// exhausted.
#[macro_export]
macro_rules! MK_EOF_TOKEN {
    ($position:expr) => {
        $crate::MK_TOKEN!($crate::lexer::tokens::EOF, String::new(), $position)
    };
}
