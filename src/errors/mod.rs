//! Error types for lexing and parsing expressions.
//!
//! Every error carries the source position it was raised at, a short
//! name for tooling, and an optional tip for the command line driver.

pub mod errors;

#[cfg(test)]
mod tests;
