//! Error types and error handling for the parsing engine.
//!
//! This module defines the error types used throughout grammar
//! construction, tokenization and parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for ill-formed grammars, unknown characters,
//!   malformed numerals and unparseable tokens
//! - A coarse error taxonomy for callers that only care about the category
//! - Helpful error messages and suggestions

pub mod errors;
