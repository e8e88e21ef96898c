#![allow(clippy::module_inception)]

//! Pratt parser for DynamoDB-style condition and filter expressions.
//!
//! Raw text is turned into tokens by [`lexer`], and [`parser`] builds a
//! [`ast::statements::DynamoExpression`] from them, collecting diagnostics
//! instead of stopping at the first problem.

use crate::{
    ast::statements::DynamoExpression,
    config::ParserConfig,
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::TokenStream},
    parser::parser::{parse, Diagnostics},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Tokenizes `input` and parses it as a single expression.
///
/// A lexer failure is returned as `Err`; parse diagnostics travel in the
/// returned [`Diagnostics`] and must be checked before the tree is used.
pub fn parse_str(
    input: &str,
    config: &ParserConfig,
) -> Result<(DynamoExpression, Diagnostics), Error> {
    let tokens = tokenize(input)?;
    Ok(parse(TokenStream::new(tokens), config))
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text, and the offset of
/// `position` within that line. Positions past the end clamp to the last
/// line, which is where the lexer places `EOF`.
pub fn get_line_at_position(content: &str, position: usize) -> (usize, String, usize) {
    let pos = position;

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    match content.split_inclusive('\n').last() {
        Some(last) => {
            let line_start = content.len() - last.len();
            (line_number - 1, last.to_string(), pos.saturating_sub(line_start).min(last.len()))
        }
        None => (1, String::new(), 0),
    }
}
