/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression enum and its helpers
/// - expressions: Definitions for the individual expression nodes
/// - statements: The expression statement and the parse result root
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
