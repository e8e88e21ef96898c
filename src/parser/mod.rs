//! Parser module for building the expression AST.
//!
//! A Pratt parser over the token stream. Each token kind may have a NUD
//! (null denotation, prefix) handler and a LED (left denotation, infix)
//! handler, and a binding power that decides how far an operand extends:
//!
//! - Names, `NOT` and grouping parentheses start expressions
//! - Comparisons, `AND`/`OR`, `BETWEEN ... AND ...` and calls continue them
//! - Errors are collected in [`parser::Diagnostics`] rather than raised

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
