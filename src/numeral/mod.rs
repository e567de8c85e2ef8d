//! Numeral handling shared by the lexers and the default parselets.
//!
//! - `radix`: exact re-basing of digit strings and signed exponents
//! - `numeral`: the reader for the numeral text lexers emit

pub mod numeral;
pub mod radix;
