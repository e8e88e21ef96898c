//! Lexical analysis for condition expressions.
//!
//! - Tokenization of expression text using regex patterns
//! - Case-insensitive recognition of the AND/OR/NOT/BETWEEN keywords
//! - Attribute names, placeholders, numbers and strings as identifiers
//! - The [`tokens::TokenSource`] boundary the parser pulls from

pub mod lexer;
pub mod tokens;
